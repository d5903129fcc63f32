//! High-contrast accessibility mode.
//!
//! The mode is a class on `body` mirrored into a persisted `"on"`/`"off"`
//! preference so the choice survives reloads and page changes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;
use crate::page::ClassList;
use crate::prefs::{PreferenceError, PreferenceStore};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContrastMode {
    On,
    #[default]
    Off,
}

impl ContrastMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
        }
    }

    pub const fn from_enabled(enabled: bool) -> Self {
        if enabled { Self::On } else { Self::Off }
    }

    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

impl fmt::Display for ContrastMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContrastMode {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on" => Ok(Self::On),
            "off" => Ok(Self::Off),
            other => Err(PreferenceError::InvalidValue {
                key: "contrast".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Settings object wrapping an injected store.
pub struct Preferences<S> {
    store: S,
    contrast_key: String,
}

impl<S: PreferenceStore> Preferences<S> {
    pub fn new(store: S, contrast_key: impl Into<String>) -> Self {
        Self {
            store,
            contrast_key: contrast_key.into(),
        }
    }

    pub fn from_config(store: S, config: &SiteConfig) -> Self {
        Self::new(store, config.contrast_storage_key.clone())
    }

    /// Load the persisted contrast mode. A missing entry means `Off`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or holds an unknown value.
    pub fn load_contrast(&self) -> Result<ContrastMode, PreferenceError> {
        let stored = self
            .store
            .get(&self.contrast_key)
            .map_err(|e| PreferenceError::Storage(e.to_string()))?;
        match stored {
            None => Ok(ContrastMode::Off),
            Some(value) => value.parse().map_err(|_| PreferenceError::InvalidValue {
                key: self.contrast_key.clone(),
                value,
            }),
        }
    }

    /// Persist the contrast mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write.
    pub fn save_contrast(&self, mode: ContrastMode) -> Result<(), PreferenceError> {
        self.store
            .set(&self.contrast_key, mode.as_str())
            .map_err(|e| PreferenceError::Storage(e.to_string()))
    }
}

/// Applies and flips the high-contrast class, keeping the preference in sync.
pub struct ContrastSwitch<B, S> {
    body: B,
    prefs: Preferences<S>,
    class: String,
}

impl<B: ClassList, S: PreferenceStore> ContrastSwitch<B, S> {
    pub fn new(body: B, prefs: Preferences<S>, config: &SiteConfig) -> Self {
        Self {
            body,
            prefs,
            class: config.high_contrast_class.clone(),
        }
    }

    pub fn mode(&self) -> ContrastMode {
        ContrastMode::from_enabled(self.body.has_class(&self.class))
    }

    /// Apply the persisted preference at page load.
    ///
    /// Only an explicit `"on"` adds the class; anything else leaves the page
    /// as rendered.
    pub fn restore(&self) -> ContrastMode {
        match self.prefs.load_contrast() {
            Ok(ContrastMode::On) => {
                self.body.add_class(&self.class);
                ContrastMode::On
            }
            Ok(ContrastMode::Off) => ContrastMode::Off,
            Err(err) => {
                log::warn!("ignoring stored contrast preference: {err}");
                ContrastMode::Off
            }
        }
    }

    /// Flip the class on `body` and persist the resulting state.
    pub fn toggle(&self) -> ContrastMode {
        let mode = ContrastMode::from_enabled(self.body.toggle_class(&self.class));
        if let Err(err) = self.prefs.save_contrast(mode) {
            log::warn!("failed to persist contrast preference: {err}");
        }
        log::info!("high contrast {mode}");
        mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::MemoryClassList;
    use crate::prefs::MemoryStore;

    fn switch(
        store: MemoryStore,
    ) -> (ContrastSwitch<MemoryClassList, MemoryStore>, MemoryClassList) {
        let cfg = SiteConfig::default();
        let body = MemoryClassList::new();
        let prefs = Preferences::from_config(store, &cfg);
        (ContrastSwitch::new(body.clone(), prefs, &cfg), body)
    }

    #[test]
    fn parses_persisted_strings() {
        assert_eq!("on".parse::<ContrastMode>().unwrap(), ContrastMode::On);
        assert_eq!("off".parse::<ContrastMode>().unwrap(), ContrastMode::Off);
        assert!("ON".parse::<ContrastMode>().is_err());
    }

    #[test]
    fn restore_applies_persisted_on() {
        let (switch, body) = switch(MemoryStore::with_value("contrastMode", "on"));
        assert_eq!(switch.restore(), ContrastMode::On);
        assert!(body.has_class("high-contrast"));
    }

    #[test]
    fn restore_leaves_page_alone_without_preference() {
        let (switch, body) = switch(MemoryStore::new());
        assert_eq!(switch.restore(), ContrastMode::Off);
        assert_eq!(body.writes(), 0);
    }

    #[test]
    fn unknown_value_is_treated_as_off() {
        let store = MemoryStore::with_value("contrastMode", "yes");
        let prefs = Preferences::new(store.clone(), "contrastMode");
        assert!(matches!(
            prefs.load_contrast(),
            Err(PreferenceError::InvalidValue { .. })
        ));
        let (switch, body) = switch(store);
        assert_eq!(switch.restore(), ContrastMode::Off);
        assert!(!body.has_class("high-contrast"));
    }

    #[test]
    fn toggling_twice_restores_state_and_persists_off() {
        let store = MemoryStore::new();
        let (switch, body) = switch(store.clone());
        let before = body.classes();

        assert_eq!(switch.toggle(), ContrastMode::On);
        assert_eq!(store.value("contrastMode").as_deref(), Some("on"));
        assert_eq!(switch.mode(), ContrastMode::On);

        assert_eq!(switch.toggle(), ContrastMode::Off);
        assert_eq!(store.value("contrastMode").as_deref(), Some("off"));
        assert_eq!(body.classes(), before);
    }
}
