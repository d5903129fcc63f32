use std::rc::Rc;

use anyhow::Result;
use wayfinder_core::{MobileMenu, SiteConfig};
use web_sys::Document;

use crate::a11y;
use crate::dom::{DomClasses, js_err, listen, query_all};

/// Wire the mobile menu button and close-on-navigate links.
///
/// Returns `false` when the page has no navigation element.
///
/// # Errors
/// Returns an error if a selector is invalid or a listener cannot be attached.
pub fn install(doc: &Document, config: &SiteConfig) -> Result<bool> {
    let Some(nav) = doc.query_selector(&config.nav_selector).map_err(js_err)? else {
        log::debug!("no {} on page, mobile menu disabled", config.nav_selector);
        return Ok(false);
    };
    let toggle = doc
        .query_selector(&config.menu_toggle_selector)
        .map_err(js_err)?;
    let menu = Rc::new(MobileMenu::new(DomClasses::new(nav), config));

    if let Some(toggle) = toggle.clone() {
        a11y::set_expanded(&toggle, menu.is_open());
        let menu = Rc::clone(&menu);
        let button = toggle.clone();
        listen(&toggle, "click", move |_| {
            let open = menu.toggle();
            a11y::set_expanded(&button, open);
        })
        .map_err(js_err)?;
    }

    for link in query_all(doc, &config.nav_link_selector).map_err(js_err)? {
        let menu = Rc::clone(&menu);
        let toggle = toggle.clone();
        listen(&link, "click", move |_| {
            if menu.close_for_link()
                && let Some(button) = toggle.as_ref()
            {
                a11y::set_expanded(button, false);
            }
        })
        .map_err(js_err)?;
    }
    Ok(true)
}
