//! `localStorage`-backed preference store.

use wayfinder_core::{PreferenceError, PreferenceStore};
use web_sys::{Storage, Window};

use crate::dom::js_error_message;

/// Durable per-origin storage.
///
/// Holds no handle when the browser denies access (private browsing, disabled
/// storage); every operation then reports `Unavailable`.
#[derive(Debug, Clone)]
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    #[must_use]
    pub fn from_window(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("localStorage unavailable: {}", js_error_message(&err));
                None
            }
        };
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, PreferenceError> {
        self.storage
            .as_ref()
            .ok_or_else(|| PreferenceError::Unavailable("localStorage".to_string()))
    }
}

impl PreferenceStore for LocalStore {
    type Error = PreferenceError;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        self.storage()?
            .get_item(key)
            .map_err(|err| PreferenceError::Storage(js_error_message(&err)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.storage()?
            .set_item(key, value)
            .map_err(|err| PreferenceError::Storage(js_error_message(&err)))
    }
}
