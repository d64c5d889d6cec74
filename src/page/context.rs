//! Read-only view of the page URLs are generated for.

use std::fmt;

use url::Url;

/// Location of the current page.
pub trait PageContext: Send + Sync + fmt::Debug {
    /// Scheme with its trailing colon (`https:`), or empty if unknown.
    fn protocol(&self) -> &str;
    /// Host name without port.
    fn hostname(&self) -> &str;
    fn pathname(&self) -> &str;
    /// Query string with its leading `?`, or empty.
    fn search(&self) -> &str;

    /// Scheme without the colon.
    fn scheme(&self) -> &str {
        let protocol = self.protocol();
        protocol.strip_suffix(':').unwrap_or(protocol)
    }
}

/// A fixed page location.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticPageContext {
    protocol: String,
    hostname: String,
    pathname: String,
    search: String,
}

impl StaticPageContext {
    pub fn new(
        protocol: impl Into<String>,
        hostname: impl Into<String>,
        pathname: impl Into<String>,
        search: impl Into<String>,
    ) -> Self {
        let mut protocol = protocol.into();
        if !protocol.is_empty() && !protocol.ends_with(':') {
            protocol.push(':');
        }

        let mut search = search.into();
        if !search.is_empty() && !search.starts_with('?') {
            search.insert(0, '?');
        }

        Self {
            protocol,
            hostname: hostname.into(),
            pathname: pathname.into(),
            search,
        }
    }

    pub fn from_url(url: &Url) -> Self {
        Self::new(
            url.scheme(),
            url.host_str().unwrap_or_default(),
            url.path(),
            url.query().unwrap_or_default(),
        )
    }

    pub fn parse(input: &str) -> Result<Self, url::ParseError> {
        Url::parse(input).map(|url| Self::from_url(&url))
    }
}

impl PageContext for StaticPageContext {
    fn protocol(&self) -> &str {
        &self.protocol
    }

    fn hostname(&self) -> &str {
        &self.hostname
    }

    fn pathname(&self) -> &str {
        &self.pathname
    }

    fn search(&self) -> &str {
        &self.search
    }
}
