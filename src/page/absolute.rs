//! Absolute URLs from already-built paths.
//!
//! Uses the page's own protocol and host name, never the route collection's.

use crate::page::context::PageContext;

/// Qualify `path` against the current page.
///
/// - `scheme://…` and `//…` are already absolute
/// - `#frag` resolves against the page path and query, `?query` against the path
/// - `/…` is kept as is
/// - anything else is relative to the page's directory
pub fn absolute_url(page: &dyn PageContext, path: &str, scheme_relative: bool) -> String {
    if path.contains("://") || path.starts_with("//") {
        if !scheme_relative {
            return path.to_string();
        }
        return match path.find("//") {
            Some(start) => path[start..].to_string(),
            None => path.to_string(),
        };
    }

    let resolved = if path.starts_with('#') {
        format!("{}{}{}", page.pathname(), page.search(), path)
    } else if path.starts_with('?') {
        format!("{}{}", page.pathname(), path)
    } else if path.starts_with('/') {
        path.to_string()
    } else {
        format!("{}{}", directory(page.pathname()), path)
    };

    let protocol = if scheme_relative { "" } else { page.protocol() };
    format!("{}//{}{}", protocol, page.hostname(), resolved)
}

fn directory(pathname: &str) -> &str {
    if pathname.ends_with('/') {
        return pathname;
    }
    match pathname.rfind('/') {
        Some(end) => &pathname[..=end],
        None => "/",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::context::StaticPageContext;

    fn page() -> StaticPageContext {
        StaticPageContext::new("https:", "example.com", "/blog/post", "?page=2")
    }

    #[test]
    fn test_root_relative() {
        assert_eq!(absolute_url(&page(), "/user/1", false), "https://example.com/user/1");
        assert_eq!(absolute_url(&page(), "/user/1", true), "//example.com/user/1");
    }

    #[test]
    fn test_already_absolute() {
        assert_eq!(absolute_url(&page(), "http://other.org/x", false), "http://other.org/x");
        assert_eq!(absolute_url(&page(), "http://other.org/x", true), "//other.org/x");
        assert_eq!(absolute_url(&page(), "//cdn.org/a.js", false), "//cdn.org/a.js");
    }

    #[test]
    fn test_fragment_and_query() {
        assert_eq!(
            absolute_url(&page(), "#comments", false),
            "https://example.com/blog/post?page=2#comments"
        );
        assert_eq!(
            absolute_url(&page(), "?page=3", false),
            "https://example.com/blog/post?page=3"
        );
    }

    #[test]
    fn test_page_relative() {
        assert_eq!(absolute_url(&page(), "other", false), "https://example.com/blog/other");

        let dir = StaticPageContext::new("http:", "localhost", "/docs/", "");
        assert_eq!(absolute_url(&dir, "intro", false), "http://localhost/docs/intro");
        assert_eq!(directory(""), "/");
    }
}
