use wayfinder_core::SiteConfig;
use web_sys::Document;

/// Id of the optional inline JSON block that overrides [`SiteConfig`].
pub const CONFIG_ELEMENT_ID: &str = "wayfinder-config";

/// Read the page's configuration, falling back to defaults.
///
/// A malformed override is logged and ignored rather than disabling the
/// behaviors.
#[must_use]
pub fn load(doc: &Document) -> SiteConfig {
    let Some(text) = doc
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|node| node.text_content())
        .filter(|text| !text.trim().is_empty())
    else {
        return SiteConfig::default();
    };

    match SiteConfig::from_json(&text) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
            SiteConfig::default()
        }
    }
}
