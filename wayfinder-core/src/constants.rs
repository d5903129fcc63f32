//! Default page contract and tuning values.
//!
//! These mirror the markup the site ships with. Pages that deviate override
//! them through `SiteConfig`.

// Selectors -----------------------------------------------------------------
pub(crate) const MENU_TOGGLE_SELECTOR: &str = ".mobile-menu-toggle";
pub(crate) const NAV_SELECTOR: &str = ".desktop-nav";
pub(crate) const NAV_LINK_SELECTOR: &str = ".desktop-nav a";
pub(crate) const CONTRAST_TOGGLE_ID: &str = "contrast-toggle";
pub(crate) const SECTION_SELECTOR: &str = "section[id]";

// Classes -------------------------------------------------------------------
pub(crate) const NAV_OPEN_CLASS: &str = "nav-open";
pub(crate) const ACTIVE_LINK_CLASS: &str = "active-link";
pub(crate) const HIGH_CONTRAST_CLASS: &str = "high-contrast";

// Persistence ---------------------------------------------------------------
pub(crate) const CONTRAST_STORAGE_KEY: &str = "contrastMode";

// Tuning --------------------------------------------------------------------
pub(crate) const HEADER_OFFSET: f64 = 100.0;
pub(crate) const DEBOUNCE_MS: u32 = 100;
pub(crate) const INDEX_DOCUMENT: &str = "index.html";
