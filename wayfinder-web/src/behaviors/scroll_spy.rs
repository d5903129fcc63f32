use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use js_sys::Function;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wayfinder_core::{
    ActiveSectionTracker, Debounce, LinkOrigin, LinkTarget, NavLink, PageLocation, SectionGeometry,
    SiteConfig, TrackerPass, Viewport,
};
use web_sys::{Document, Element, HtmlAnchorElement, HtmlElement, Window};

use crate::dom::{BrowserViewport, DomClasses, js_err, listen, query_all};
use crate::paths;
use crate::timers::TimeoutScheduler;

type SharedDebounce = Rc<RefCell<Option<Debounce<TimeoutScheduler>>>>;

/// Handle to the installed scroll spy.
#[derive(Clone)]
pub struct ScrollSpy {
    tracker: Rc<ActiveSectionTracker<DomClasses>>,
    viewport: BrowserViewport,
}

impl ScrollSpy {
    /// Run a tracker pass immediately, bypassing the debounce.
    pub fn refresh(&self) -> TrackerPass {
        self.tracker.refresh_from(&self.viewport)
    }

    #[must_use]
    pub fn tracker(&self) -> &ActiveSectionTracker<DomClasses> {
        &self.tracker
    }
}

/// Resolve a link the way the browser navigates it.
///
/// Anchors report their fully resolved URL parts, so base paths and `../`
/// segments are already applied. Other elements fall back to the raw `href`.
/// An element without an `href` never matches.
fn link_target(el: &Element, page: &PageLocation) -> LinkTarget {
    if !el.has_attribute("href") {
        return LinkTarget {
            origin: LinkOrigin::Foreign,
            path: String::new(),
            fragment: None,
        };
    }
    match el.dyn_ref::<HtmlAnchorElement>() {
        Some(anchor) if !anchor.href().is_empty() => LinkTarget::resolved(
            &anchor.protocol(),
            &anchor.host(),
            &anchor.pathname(),
            &anchor.hash(),
            page,
        ),
        _ => LinkTarget::parse(&el.get_attribute("href").unwrap_or_default(), page),
    }
}

/// Query sections and links once, then highlight on debounced scroll.
///
/// # Errors
/// Returns an error if a selector is invalid or the scroll listener cannot be
/// attached.
pub fn install(doc: &Document, window: &Window, config: &SiteConfig) -> Result<ScrollSpy> {
    let sections: Vec<SectionGeometry> = query_all(doc, &config.section_selector)
        .map_err(js_err)?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| SectionGeometry::new(el.id(), f64::from(el.offset_top())))
        .collect();
    let viewport = BrowserViewport::new(window.clone());
    let host = window.location().host().map_err(js_err)?;
    let page = paths::page_location(&viewport.pathname(), &host, &config.index_document);
    let links: Vec<NavLink<DomClasses>> = query_all(doc, &config.nav_link_selector)
        .map_err(js_err)?
        .into_iter()
        .map(|el| {
            let target = link_target(&el, &page);
            NavLink::with_target(DomClasses::new(el), target)
        })
        .collect();

    log::debug!(
        "scroll spy: {} sections, {} links, page {}",
        sections.len(),
        links.len(),
        page.path()
    );
    let spy = ScrollSpy {
        tracker: Rc::new(ActiveSectionTracker::new(config, sections, links, page)),
        viewport,
    };

    let debounce: SharedDebounce = Rc::default();
    let on_quiet = {
        let debounce = Rc::clone(&debounce);
        let spy = spy.clone();
        Closure::<dyn FnMut()>::new(move || {
            let due = debounce
                .borrow_mut()
                .as_mut()
                .is_some_and(|pending| pending.elapsed());
            if due {
                spy.refresh();
            }
        })
    };
    let scheduler = TimeoutScheduler::new(
        window.clone(),
        on_quiet.as_ref().unchecked_ref::<Function>().clone(),
    );
    on_quiet.forget();
    *debounce.borrow_mut() = Some(Debounce::new(scheduler, config.debounce_ms));

    listen(window, "scroll", move |_| {
        if let Some(pending) = debounce.borrow_mut().as_mut() {
            pending.signal();
        }
    })
    .map_err(js_err)?;

    spy.refresh();
    Ok(spy)
}
