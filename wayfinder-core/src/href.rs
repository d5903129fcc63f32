//! Link target parsing and page path normalization.
//!
//! Navigation links point either at a section on the current page (`#about`,
//! `index.html#about`), at another page of the site (`manifesto.html`), or off
//! the site entirely. Matching is done on origin, normalized path and fragment
//! so that identifiers which happen to be prefixes of one another (`home` and
//! `homepage`) never collide.

/// Where the current document lives, relative to the deployment base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    host: Option<String>,
    base: String,
    path: String,
    index_document: String,
}

impl PageLocation {
    /// `base` is the deployment prefix (for example `/site`).
    pub fn new(pathname: &str, base: &str, index_document: &str) -> Self {
        Self {
            host: None,
            base: base.trim().trim_end_matches('/').to_string(),
            path: page_path(pathname, base, index_document),
            index_document: index_document.to_string(),
        }
    }

    /// Record `location.host`; absolute links to this host count as local.
    #[must_use]
    pub fn with_host(mut self, host: &str) -> Self {
        let host = host.trim();
        self.host = (!host.is_empty()).then(|| host.to_ascii_lowercase());
        self
    }

    /// Normalized path of the page, relative to the base.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Normalize a root-anchored path the way the page path was normalized.
    fn site_path(&self, absolute: &str) -> String {
        page_path(absolute, &self.base, &self.index_document)
    }

    /// Resolve a document-relative path against the page's directory.
    fn resolve_relative(&self, relative: &str) -> String {
        let dir = self
            .path
            .rfind('/')
            .map_or("", |slash| &self.path[..=slash]);
        normalize_path(&format!("{dir}{relative}"), &self.index_document)
    }
}

/// Which site a link leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOrigin {
    /// Relative or root-anchored; same site as the page.
    Site,
    /// Absolute `http(s)` URL with this lowercase host (and port).
    Host(String),
    /// Non-navigational: a scheme such as `mailto:` or `tel:`, or no href.
    Foreign,
}

/// The parts of an `href` that matter for highlighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    pub origin: LinkOrigin,
    /// Normalized document path relative to the deployment base.
    pub path: String,
    /// Fragment without the leading `#`, if any.
    pub fragment: Option<String>,
}

impl LinkTarget {
    /// Parse a raw `href` attribute value in the context of `page`.
    pub fn parse(href: &str, page: &PageLocation) -> Self {
        let (rest, fragment) = split_fragment(href.trim());
        let rest = rest.split('?').next().unwrap_or_default();

        let (origin, path) = if let Some(authority) = rest.strip_prefix("//") {
            absolute_target(authority, page)
        } else if let Some((scheme, after)) = split_scheme(rest) {
            match after.strip_prefix("//") {
                Some(authority) if is_web_scheme(scheme) => absolute_target(authority, page),
                _ => (LinkOrigin::Foreign, rest.to_string()),
            }
        } else if rest.is_empty() {
            (LinkOrigin::Site, page.path.clone())
        } else if rest.starts_with('/') {
            (LinkOrigin::Site, page.site_path(rest))
        } else {
            (LinkOrigin::Site, page.resolve_relative(rest))
        };

        Self {
            origin,
            path,
            fragment,
        }
    }

    /// Build a target from the browser-resolved URL parts of an anchor
    /// (`protocol`, `host`, `pathname`, `hash`).
    pub fn resolved(
        protocol: &str,
        host: &str,
        pathname: &str,
        hash: &str,
        page: &PageLocation,
    ) -> Self {
        let fragment = hash.strip_prefix('#').unwrap_or(hash).to_string();
        let fragment = (!fragment.is_empty()).then_some(fragment);

        if !is_web_scheme(protocol.trim_end_matches(':')) {
            return Self {
                origin: LinkOrigin::Foreign,
                path: pathname.to_string(),
                fragment,
            };
        }
        Self {
            origin: LinkOrigin::Host(host.to_ascii_lowercase()),
            path: page.site_path(pathname),
            fragment,
        }
    }

    /// Whether the link stays on the page's site.
    pub fn is_local(&self, page: &PageLocation) -> bool {
        match &self.origin {
            LinkOrigin::Site => true,
            LinkOrigin::Host(host) => page.host() == Some(host.as_str()),
            LinkOrigin::Foreign => false,
        }
    }

    /// Whether this link points into `page`.
    pub fn is_on_page(&self, page: &PageLocation) -> bool {
        self.is_local(page) && self.path == page.path()
    }
}

/// Normalize `location.pathname` for comparison with link paths.
///
/// `base` is the deployment prefix (for example `/site`) and is removed first.
/// The root resolves to `index_document`.
pub fn page_path(pathname: &str, base: &str, index_document: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    let stripped = if base.is_empty() {
        pathname
    } else {
        pathname
            .strip_prefix(base)
            .filter(|rest| rest.is_empty() || rest.starts_with('/'))
            .unwrap_or(pathname)
    };
    normalize_path(stripped, index_document)
}

fn normalize_path(path: &str, index_document: &str) -> String {
    let path = path.trim();
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    let last = path.rsplit('/').next().unwrap_or_default();
    let names_directory = matches!(last, "" | "." | "..");

    let joined = segments.join("/");
    if joined.is_empty() {
        index_document.to_string()
    } else if names_directory {
        format!("{joined}/{index_document}")
    } else {
        joined
    }
}

fn split_fragment(href: &str) -> (&str, Option<String>) {
    match href.split_once('#') {
        Some((rest, frag)) if !frag.is_empty() => (rest, Some(frag.to_string())),
        Some((rest, _)) => (rest, None),
        None => (href, None),
    }
}

/// Split `scheme:rest` when `href` starts with a URL scheme.
fn split_scheme(href: &str) -> Option<(&str, &str)> {
    let (scheme, rest) = href.split_once(':')?;
    let mut chars = scheme.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then_some((scheme, rest))
}

fn is_web_scheme(scheme: &str) -> bool {
    scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https")
}

fn absolute_target(authority: &str, page: &PageLocation) -> (LinkOrigin, String) {
    let (host, path) = authority
        .find('/')
        .map_or((authority, "/"), |slash| authority.split_at(slash));
    (
        LinkOrigin::Host(host.to_ascii_lowercase()),
        page.site_path(path),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const INDEX: &str = "index.html";

    fn root_page(pathname: &str) -> PageLocation {
        PageLocation::new(pathname, "", INDEX)
    }

    #[test]
    fn same_page_anchor_targets_current_page() {
        let page = root_page("/manifesto.html");
        let target = LinkTarget::parse("#about", &page);
        assert_eq!(target.path, "manifesto.html");
        assert_eq!(target.fragment.as_deref(), Some("about"));
        assert!(target.is_on_page(&page));
    }

    #[test]
    fn parses_page_with_anchor() {
        let target = LinkTarget::parse("/index.html#team", &root_page("/"));
        assert_eq!(target.path, "index.html");
        assert_eq!(target.fragment.as_deref(), Some("team"));
        assert!(!target.is_on_page(&root_page("/manifesto.html")));
    }

    #[test]
    fn parses_plain_page_and_drops_query() {
        let target = LinkTarget::parse("manifesto.html?ref=nav", &root_page("/"));
        assert_eq!(target.path, "manifesto.html");
        assert_eq!(target.fragment, None);
    }

    #[test]
    fn empty_fragment_is_ignored() {
        let target = LinkTarget::parse("contact.html#", &root_page("/"));
        assert_eq!(target.fragment, None);
    }

    #[test]
    fn other_hosts_are_never_local() {
        let page = root_page("/").with_host("example.org");
        let partner = LinkTarget::parse("https://partner.org", &page);
        assert_eq!(partner.origin, LinkOrigin::Host("partner.org".into()));
        assert_eq!(partner.path, INDEX);
        assert!(!partner.is_on_page(&page));

        let scheme_relative = LinkTarget::parse("//partner.org/index.html", &page);
        assert!(!scheme_relative.is_local(&page));
    }

    #[test]
    fn absolute_url_to_own_host_is_local() {
        let page = root_page("/blog/").with_host("Example.org");
        let target = LinkTarget::parse("https://example.org/blog/#latest", &page);
        assert_eq!(target.path, "blog/index.html");
        assert_eq!(target.fragment.as_deref(), Some("latest"));
        assert!(target.is_on_page(&page));
    }

    #[test]
    fn non_web_schemes_are_foreign() {
        let page = root_page("/");
        for href in ["mailto:hello@example.org", "tel:+15550100", "javascript:void(0)"] {
            let target = LinkTarget::parse(href, &page);
            assert_eq!(target.origin, LinkOrigin::Foreign, "{href}");
            assert!(!target.is_local(&page));
        }
    }

    #[test]
    fn base_is_stripped_from_root_anchored_links() {
        let page = PageLocation::new("/site/manifesto.html", "/site", INDEX);
        let target = LinkTarget::parse("/site/manifesto.html", &page);
        assert_eq!(target.path, "manifesto.html");
        assert!(target.is_on_page(&page));
        assert_eq!(LinkTarget::parse("/site/", &page).path, INDEX);
    }

    #[test]
    fn relative_links_resolve_against_page_directory() {
        let page = root_page("/blog/post.html");
        assert_eq!(LinkTarget::parse("../index.html", &page).path, INDEX);
        assert_eq!(LinkTarget::parse("other.html", &page).path, "blog/other.html");
        assert_eq!(LinkTarget::parse("./", &page).path, "blog/index.html");
        assert_eq!(LinkTarget::parse("../../../x.html", &page).path, "x.html");
    }

    #[test]
    fn resolved_parts_follow_the_browser_url() {
        let page = PageLocation::new("/site/", "/site", INDEX).with_host("example.org");
        let target =
            LinkTarget::resolved("https:", "example.org", "/site/about.html", "#team", &page);
        assert_eq!(target.path, "about.html");
        assert_eq!(target.fragment.as_deref(), Some("team"));
        assert!(target.is_local(&page));

        let mail = LinkTarget::resolved("mailto:", "", "hello@example.org", "", &page);
        assert_eq!(mail.origin, LinkOrigin::Foreign);
        assert_eq!(mail.fragment, None);
    }

    #[test]
    fn root_path_resolves_to_index_document() {
        assert_eq!(page_path("/", "", INDEX), "index.html");
        assert_eq!(page_path("", "", INDEX), "index.html");
        assert_eq!(page_path("/manifesto.html", "", INDEX), "manifesto.html");
    }

    #[test]
    fn base_path_is_stripped_only_on_segment_boundary() {
        assert_eq!(page_path("/site/about.html", "/site/", INDEX), "about.html");
        assert_eq!(page_path("/site", "/site", INDEX), "index.html");
        assert_eq!(page_path("/sitemap.html", "/site", INDEX), "sitemap.html");
    }
}
