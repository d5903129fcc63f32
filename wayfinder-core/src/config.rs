//! Site configuration for the behavior layer.
//!
//! Every selector, class name and tuning value the page contract relies on
//! lives here. Pages may override any subset through inline JSON; missing
//! fields fall back to the defaults below.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    ACTIVE_LINK_CLASS, CONTRAST_STORAGE_KEY, CONTRAST_TOGGLE_ID, DEBOUNCE_MS, HEADER_OFFSET,
    HIGH_CONTRAST_CLASS, INDEX_DOCUMENT, MENU_TOGGLE_SELECTOR, NAV_LINK_SELECTOR, NAV_OPEN_CLASS,
    NAV_SELECTOR, SECTION_SELECTOR,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub menu_toggle_selector: String,
    pub nav_selector: String,
    pub nav_link_selector: String,
    pub contrast_toggle_id: String,
    pub section_selector: String,
    pub nav_open_class: String,
    pub active_link_class: String,
    pub high_contrast_class: String,
    pub contrast_storage_key: String,
    /// Fixed header height subtracted from each section's document offset.
    pub header_offset: f64,
    /// Quiet period before a scroll burst triggers the tracker.
    pub debounce_ms: u32,
    /// Document the site root (`/`) resolves to when matching page links.
    pub index_document: String,
    pub debug: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            menu_toggle_selector: MENU_TOGGLE_SELECTOR.to_string(),
            nav_selector: NAV_SELECTOR.to_string(),
            nav_link_selector: NAV_LINK_SELECTOR.to_string(),
            contrast_toggle_id: CONTRAST_TOGGLE_ID.to_string(),
            section_selector: SECTION_SELECTOR.to_string(),
            nav_open_class: NAV_OPEN_CLASS.to_string(),
            active_link_class: ACTIVE_LINK_CLASS.to_string(),
            high_contrast_class: HIGH_CONTRAST_CLASS.to_string(),
            contrast_storage_key: CONTRAST_STORAGE_KEY.to_string(),
            header_offset: HEADER_OFFSET,
            debounce_ms: DEBOUNCE_MS,
            index_document: INDEX_DOCUMENT.to_string(),
            debug: false,
        }
    }
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON for this shape.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let parsed: Self = serde_json::from_str(json)?;
        Ok(parsed.validated())
    }

    /// Clamp values that would make the behaviors misbehave.
    #[must_use]
    pub fn validated(mut self) -> Self {
        if !self.header_offset.is_finite() || self.header_offset < 0.0 {
            log::warn!(
                "header offset {} is invalid, clamping to 0",
                self.header_offset
            );
            self.header_offset = 0.0;
        }
        if self.debounce_ms == 0 {
            log::warn!("debounce window of 0 ms is invalid, clamping to 1");
            self.debounce_ms = 1;
        }
        if self.index_document.trim().is_empty() {
            log::warn!("empty index document, using {INDEX_DOCUMENT}");
            self.index_document = INDEX_DOCUMENT.to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_contract() {
        let cfg = SiteConfig::default();
        assert_eq!(cfg.menu_toggle_selector, ".mobile-menu-toggle");
        assert_eq!(cfg.nav_link_selector, ".desktop-nav a");
        assert_eq!(cfg.section_selector, "section[id]");
        assert_eq!(cfg.contrast_storage_key, "contrastMode");
        assert!((cfg.header_offset - 100.0).abs() < f64::EPSILON);
        assert_eq!(cfg.debounce_ms, 100);
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let json = r#"{"headerOffset": 64, "activeLinkClass": "is-current"}"#;
        let cfg = SiteConfig::from_json(json).expect("valid config");
        assert!((cfg.header_offset - 64.0).abs() < f64::EPSILON);
        assert_eq!(cfg.active_link_class, "is-current");
        assert_eq!(cfg.nav_open_class, "nav-open");
    }

    #[test]
    fn invalid_values_are_clamped() {
        let json = r#"{"headerOffset": -5, "debounceMs": 0, "indexDocument": " "}"#;
        let cfg = SiteConfig::from_json(json).expect("valid config");
        assert!(cfg.header_offset.abs() < f64::EPSILON);
        assert_eq!(cfg.debounce_ms, 1);
        assert_eq!(cfg.index_document, "index.html");
    }

    #[test]
    fn zero_debounce_window_is_clamped_without_touching_valid_fields() {
        let cfg = SiteConfig {
            debounce_ms: 0,
            ..SiteConfig::default()
        }
        .validated();
        assert_eq!(cfg.debounce_ms, 1);
        assert!((cfg.header_offset - 100.0).abs() < f64::EPSILON);
        assert_eq!(cfg.index_document, "index.html");
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = SiteConfig::from_json("{not json").expect_err("should fail");
        assert!(format!("{err}").contains("JSON parsing error"));
    }
}
