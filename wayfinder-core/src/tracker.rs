//! Active-section tracking ("scroll spy").
//!
//! Given the page's sections in document order and the navigation links, a
//! tracker pass works out which section the reader is in and marks exactly one
//! matching link as active.

use crate::config::SiteConfig;
use crate::href::{LinkTarget, PageLocation};
use crate::page::{ClassList, SectionGeometry, Viewport};

/// A navigation anchor and its parsed target.
#[derive(Debug, Clone)]
pub struct NavLink<E> {
    pub element: E,
    pub target: LinkTarget,
}

impl<E> NavLink<E> {
    /// Parse a raw `href` attribute relative to `page`.
    pub fn new(element: E, href: &str, page: &PageLocation) -> Self {
        Self::with_target(element, LinkTarget::parse(href, page))
    }

    pub const fn with_target(element: E, target: LinkTarget) -> Self {
        Self { element, target }
    }
}

/// Why a link was chosen on the last pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Section,
    Page,
}

/// Outcome of a tracker pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerPass {
    pub current_section: Option<String>,
    pub active: Option<(usize, MatchKind)>,
}

/// The lowest section whose adjusted top has been scrolled past.
///
/// Sections are visited in document order and later matches overwrite earlier
/// ones.
pub fn current_section(
    sections: &[SectionGeometry],
    scroll_y: f64,
    header_offset: f64,
) -> Option<&str> {
    let mut current = None;
    for section in sections {
        let section_top = section.offset_top - header_offset;
        if scroll_y >= section_top && !section.id.is_empty() {
            current = Some(section.id.as_str());
        }
    }
    current
}

/// Pick the single link to highlight.
///
/// A section match takes precedence over the page fallback, which only
/// considers fragment-less links. Links leaving the site never match. Within
/// each kind the last link in iteration order wins.
pub fn resolve_active<E>(
    links: &[NavLink<E>],
    current: Option<&str>,
    page: &PageLocation,
) -> Option<(usize, MatchKind)> {
    let section_hit = current.and_then(|id| {
        links.iter().rposition(|link| {
            link.target.fragment.as_deref() == Some(id) && link.target.is_on_page(page)
        })
    });
    if let Some(idx) = section_hit {
        return Some((idx, MatchKind::Section));
    }

    links
        .iter()
        .rposition(|link| link.target.fragment.is_none() && link.target.is_on_page(page))
        .map(|idx| (idx, MatchKind::Page))
}

pub struct ActiveSectionTracker<E> {
    sections: Vec<SectionGeometry>,
    links: Vec<NavLink<E>>,
    page: PageLocation,
    header_offset: f64,
    active_class: String,
}

impl<E: ClassList> ActiveSectionTracker<E> {
    /// Build a tracker over sections and links queried once at startup.
    pub fn new(
        config: &SiteConfig,
        sections: Vec<SectionGeometry>,
        links: Vec<NavLink<E>>,
        page: PageLocation,
    ) -> Self {
        Self {
            sections,
            links,
            page,
            header_offset: config.header_offset,
            active_class: config.active_link_class.clone(),
        }
    }

    pub fn sections(&self) -> &[SectionGeometry] {
        &self.sections
    }

    /// Run a pass against the viewport's current scroll offset.
    pub fn refresh_from(&self, viewport: &impl Viewport) -> TrackerPass {
        self.refresh(viewport.scroll_y())
    }

    /// Run a pass at `scroll_y`, updating the links' active marker.
    ///
    /// With no sections or no links the pass performs no mutations.
    pub fn refresh(&self, scroll_y: f64) -> TrackerPass {
        if self.sections.is_empty() || self.links.is_empty() {
            return TrackerPass {
                current_section: None,
                active: None,
            };
        }

        let current = current_section(&self.sections, scroll_y, self.header_offset);
        let active = resolve_active(&self.links, current, &self.page);

        for (idx, link) in self.links.iter().enumerate() {
            link.element.remove_class(&self.active_class);
            if active.is_some_and(|(hit, _)| hit == idx) {
                link.element.add_class(&self.active_class);
            }
        }

        log::debug!("scroll spy at {scroll_y}: section={current:?} active={active:?}");

        TrackerPass {
            current_section: current.map(str::to_string),
            active,
        }
    }
}
