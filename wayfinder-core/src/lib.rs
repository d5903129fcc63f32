//! Wayfinder behavior core
//!
//! Platform-agnostic logic for the site's navigation and accessibility
//! behaviors. This crate has no browser dependencies: hosts supply the page
//! through the traits in [`page`], [`prefs`] and [`debounce`].

pub mod config;
pub mod constants;
pub mod contrast;
pub mod debounce;
pub mod href;
pub mod menu;
pub mod page;
pub mod prefs;
pub mod tracker;

// Re-export commonly used types
pub use config::{ConfigError, SiteConfig};
pub use contrast::{ContrastMode, ContrastSwitch, Preferences};
pub use debounce::{Debounce, Scheduler};
pub use href::{LinkOrigin, LinkTarget, PageLocation, page_path};
pub use menu::MobileMenu;
pub use page::{ClassList, MemoryClassList, SectionGeometry, StaticViewport, Viewport};
pub use prefs::{MemoryStore, PreferenceError, PreferenceStore};
pub use tracker::{
    ActiveSectionTracker, MatchKind, NavLink, TrackerPass, current_section, resolve_active,
};
