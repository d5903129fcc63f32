use wayfinder_core::SiteConfig;
use web_sys::{Document, Window};

use crate::behaviors::{self, ScrollSpy};
use crate::dom::{self, listen};

/// What ended up installed on the page.
#[derive(Clone, Default)]
pub struct Installed {
    pub menu: bool,
    pub contrast: bool,
    pub scroll_spy: Option<ScrollSpy>,
}

/// Install every behavior against `doc`.
///
/// A failure in one behavior is logged and does not stop the others.
pub fn install(doc: &Document, window: &Window, config: &SiteConfig) -> Installed {
    let menu = behaviors::menu::install(doc, config).unwrap_or_else(|err| {
        log::error!("mobile menu: {err:#}");
        false
    });
    let contrast = behaviors::contrast::install(doc, window, config).unwrap_or_else(|err| {
        log::error!("contrast toggle: {err:#}");
        false
    });
    let scroll_spy = match behaviors::scroll_spy::install(doc, window, config) {
        Ok(spy) => Some(spy),
        Err(err) => {
            log::error!("scroll spy: {err:#}");
            None
        }
    };
    Installed {
        menu,
        contrast,
        scroll_spy,
    }
}

/// Load configuration and install once the document has been parsed.
pub fn boot() {
    let (Some(window), Some(doc)) = (dom::window(), dom::document()) else {
        return;
    };

    if doc.ready_state() == "loading" {
        let target = doc.clone();
        let win = window.clone();
        let attached = listen(&doc, "DOMContentLoaded", move |_| {
            run(&target, &win);
        });
        if let Err(err) = attached {
            log::error!("DOMContentLoaded: {}", dom::js_error_message(&err));
        }
    } else {
        run(&doc, &window);
    }
}

fn run(doc: &Document, window: &Window) {
    let config = crate::config::load(doc);
    crate::logging::init(config.debug);
    let installed = install(doc, window, &config);
    log::debug!(
        "installed: menu={} contrast={} scroll_spy={}",
        installed.menu,
        installed.contrast,
        installed.scroll_spy.is_some()
    );
}
