use std::rc::Rc;

use anyhow::{Context, Result};
use wayfinder_core::{ContrastSwitch, Preferences, SiteConfig};
use web_sys::{Document, Window};

use crate::a11y;
use crate::dom::{DomClasses, js_err, listen};
use crate::storage::LocalStore;

/// Restore the saved contrast mode and wire the toggle button.
///
/// Returns `false` when the page has no contrast toggle; the saved mode is
/// then left unapplied.
///
/// # Errors
/// Returns an error if the document has no `body` or the listener cannot be
/// attached.
pub fn install(doc: &Document, window: &Window, config: &SiteConfig) -> Result<bool> {
    let Some(toggle) = doc.get_element_by_id(&config.contrast_toggle_id) else {
        log::debug!("no #{} on page, contrast toggle disabled", config.contrast_toggle_id);
        return Ok(false);
    };
    let body = doc.body().context("document has no body")?;

    let prefs = Preferences::from_config(LocalStore::from_window(window), config);
    let switch = Rc::new(ContrastSwitch::new(DomClasses::new(body.into()), prefs, config));
    let mode = switch.restore();
    a11y::set_pressed(&toggle, mode.is_on());

    let button = toggle.clone();
    listen(&toggle, "click", move |_| {
        let mode = switch.toggle();
        a11y::set_pressed(&button, mode.is_on());
    })
    .map_err(js_err)?;
    Ok(true)
}
