//! Route lookup and URL generation.
//!
//! # Responsibilities
//! - Own the route collection, installed exactly once
//! - Generate relative paths and absolute URLs by route name
//! - Expose the logout URL and path of the route dump
//!
//! # Design Decisions
//! - Immutable after initialisation (thread-safe without locks)
//! - Unknown or empty route names are logged and answered with ""
//! - Fatal problems are returned as `RouterError`, never panics

use std::sync::{Arc, OnceLock};

use crate::config::RouterSettings;
use crate::error::{RouterError, RouterResult};
use crate::page::{absolute_url, PageContext, StaticPageContext};
use crate::routing::collection::RouteCollection;
use crate::routing::host::{build_host, scheme_and_host};
use crate::routing::params::Parameters;
use crate::routing::parser::parse_collection;
use crate::routing::path::build_path;
use crate::routing::route::Route;

/// Generates URLs for named routes.
pub trait UrlGenerator {
    /// Path relative to the host, e.g. `/user/1?tab=posts`.
    fn path(&self, name: &str, params: &Parameters) -> RouterResult<String>;

    /// Absolute URL, or scheme-relative (`//host/path`) when asked.
    fn url(&self, name: &str, params: &Parameters, scheme_relative: bool) -> RouterResult<String>;

    /// Qualify an already-built path against the current page.
    fn absolute_url(&self, path: &str, scheme_relative: bool) -> String;

    /// Logout URL of the default firewall, if the dump has one.
    fn logout_url(&self) -> RouterResult<Option<String>>;

    /// Logout path of the default firewall, if the dump has one.
    fn logout_path(&self) -> RouterResult<Option<String>>;
}

/// Client-side URL generator over a route dump.
#[derive(Debug)]
pub struct Router {
    settings: RouterSettings,
    page: Arc<dyn PageContext>,
    collection: OnceLock<RouteCollection>,
}

impl Router {
    /// Build and initialise a router with an unknown page context.
    pub fn new(settings: RouterSettings) -> RouterResult<Self> {
        Self::with_context(settings, Arc::new(StaticPageContext::default()))
    }

    /// Build and initialise a router for the given page.
    pub fn with_context(settings: RouterSettings, page: Arc<dyn PageContext>) -> RouterResult<Self> {
        let router = Self::uninitialized(settings, page);
        router.initialize()?;
        Ok(router)
    }

    /// Build a router without a route collection.
    ///
    /// Every query fails with `NotInitialized` until [`initialize`](Self::initialize)
    /// or [`install`](Self::install) succeeds.
    pub fn uninitialized(settings: RouterSettings, page: Arc<dyn PageContext>) -> Self {
        Self {
            settings,
            page,
            collection: OnceLock::new(),
        }
    }

    /// Parse `settings.data` and install the result.
    pub fn initialize(&self) -> RouterResult<()> {
        if self.is_initialized() {
            return Err(RouterError::AlreadyInitialized);
        }

        let collection = parse_collection(&self.settings.data, &self.settings, self.page.as_ref());
        self.install(collection)
    }

    /// Install an already-parsed collection.
    pub fn install(&self, collection: RouteCollection) -> RouterResult<()> {
        let routes = collection.len();
        let scheme = collection.scheme.clone();

        self.collection
            .set(collection)
            .map_err(|_| RouterError::AlreadyInitialized)?;

        tracing::info!(routes, scheme = %scheme, "Route collection installed");
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.collection.get().is_some()
    }

    pub fn settings(&self) -> &RouterSettings {
        &self.settings
    }

    pub fn page(&self) -> &dyn PageContext {
        self.page.as_ref()
    }

    /// The installed route collection.
    pub fn collection(&self) -> RouterResult<&RouteCollection> {
        self.collection.get().ok_or(RouterError::NotInitialized)
    }

    // Empty and unknown names are not errors.
    fn find_route<'a>(&self, collection: &'a RouteCollection, name: &str) -> Option<&'a Route> {
        if name.is_empty() {
            tracing::warn!("The route name must not be empty.");
            return None;
        }

        let route = collection.get(name);
        if route.is_none() {
            tracing::warn!(route = %name, "No route with this name was found.");
        }
        route
    }
}

impl UrlGenerator for Router {
    fn path(&self, name: &str, params: &Parameters) -> RouterResult<String> {
        let collection = self.collection()?;
        let Some(route) = self.find_route(collection, name) else {
            return Ok(String::new());
        };

        let path = build_path(route, params)?.render(&collection.base_url);

        if self.settings.debug {
            tracing::debug!(route = %name, path = %path, "Path generated");
        }
        Ok(path)
    }

    fn url(&self, name: &str, params: &Parameters, scheme_relative: bool) -> RouterResult<String> {
        let collection = self.collection()?;
        let Some(route) = self.find_route(collection, name) else {
            return Ok(String::new());
        };

        let host = build_host(route, params)?;
        let prefix = scheme_and_host(route, collection, &host, scheme_relative);
        let url = prefix + &build_path(route, params)?.render(&collection.base_url);

        if self.settings.debug {
            tracing::debug!(route = %name, url = %url, "URL generated");
        }
        Ok(url)
    }

    fn absolute_url(&self, path: &str, scheme_relative: bool) -> String {
        absolute_url(self.page.as_ref(), path, scheme_relative)
    }

    fn logout_url(&self) -> RouterResult<Option<String>> {
        let collection = self.collection()?;
        if collection.logout_url.is_empty() {
            tracing::warn!("No logout URL was provided. The default firewall may not have one.");
            return Ok(None);
        }
        Ok(Some(collection.logout_url.clone()))
    }

    fn logout_path(&self) -> RouterResult<Option<String>> {
        let collection = self.collection()?;
        if collection.logout_path.is_empty() {
            tracing::warn!("No logout path was provided. The default firewall may not have one.");
            return Ok(None);
        }
        Ok(Some(collection.logout_path.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::token::Token;
    use serde_json::json;

    fn settings() -> RouterSettings {
        RouterSettings::with_data(json!({
            "scheme": "http",
            "host": "localhost",
            "logout_path": "/logout",
            "routes": {
                "home": { "tokens": [["text", "/"]] }
            }
        }))
    }

    #[test]
    fn test_lifecycle() {
        let router = Router::uninitialized(settings(), Arc::new(StaticPageContext::default()));
        assert_eq!(router.path("home", &Parameters::new()), Err(RouterError::NotInitialized));
        assert_eq!(router.logout_url(), Err(RouterError::NotInitialized));

        router.initialize().unwrap();
        assert_eq!(router.path("home", &Parameters::new()).unwrap(), "/");
        assert_eq!(router.initialize(), Err(RouterError::AlreadyInitialized));
        assert_eq!(
            router.install(RouteCollection::default()),
            Err(RouterError::AlreadyInitialized)
        );
    }

    #[test]
    fn test_empty_and_unknown_names() {
        let router = Router::new(settings()).unwrap();
        assert_eq!(router.path("", &Parameters::new()).unwrap(), "");
        assert_eq!(router.path("nope", &Parameters::new()).unwrap(), "");
        assert_eq!(router.url("nope", &Parameters::new(), false).unwrap(), "");
    }

    #[test]
    fn test_logout() {
        let router = Router::new(settings()).unwrap();
        assert_eq!(router.logout_url().unwrap(), None);
        assert_eq!(router.logout_path().unwrap(), Some("/logout".to_string()));
    }

    #[test]
    fn test_install_precompiled() {
        let router = Router::uninitialized(RouterSettings::default(), Arc::new(StaticPageContext::default()));
        router
            .install(RouteCollection {
                scheme: "https".into(),
                host: "example.com".into(),
                routes: vec![Route {
                    name: "about".into(),
                    tokens: vec![Token::text("/about")],
                    ..Route::default()
                }],
                ..RouteCollection::default()
            })
            .unwrap();

        assert_eq!(
            router.url("about", &Parameters::new(), false).unwrap(),
            "https://example.com/about"
        );
    }
}
