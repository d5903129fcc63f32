//! Deployment base path handling for page matching.
use wayfinder_core::PageLocation;

/// When `PUBLIC_URL` is set at compile time (e.g., `/site` for GitHub Pages),
/// it is stripped from `location.pathname` and from root-anchored links before
/// they are compared. Local builds without `PUBLIC_URL` match from the root.
#[must_use]
pub fn base_path() -> Option<String> {
    base_path_with(option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Location of the page at `pathname` on `host`, relative to the deployment base.
#[must_use]
pub fn page_location(pathname: &str, host: &str, index_document: &str) -> PageLocation {
    page_location_with_base(pathname, host, base_path().as_deref(), index_document)
}

fn page_location_with_base(
    pathname: &str,
    host: &str,
    base: Option<&str>,
    index_document: &str,
) -> PageLocation {
    PageLocation::new(pathname, base.unwrap_or(""), index_document).with_host(host)
}

fn base_path_with(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    if base.is_empty() {
        None
    } else if base.starts_with('/') {
        Some(base.to_string())
    } else {
        Some(format!("/{base}"))
    }
}

#[cfg(test)]
mod tests {
    use super::{base_path_with, page_location_with_base};

    #[test]
    fn base_path_is_trimmed_and_rooted() {
        assert_eq!(base_path_with("/site/"), Some(String::from("/site")));
        assert_eq!(base_path_with("site"), Some(String::from("/site")));
        assert_eq!(base_path_with(" / "), None);
        assert_eq!(base_path_with(""), None);
    }

    #[test]
    fn page_location_resolves_root_to_index() {
        let page = page_location_with_base("/", "example.org", None, "index.html");
        assert_eq!(page.path(), "index.html");
        assert_eq!(page.host(), Some("example.org"));
    }

    #[test]
    fn page_location_strips_deployment_base() {
        let base = base_path_with("site");
        let page = page_location_with_base(
            "/site/manifesto.html",
            "example.org",
            base.as_deref(),
            "index.html",
        );
        assert_eq!(page.path(), "manifesto.html");
    }
}
