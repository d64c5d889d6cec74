//! Shared fixtures for integration testing.

use std::path::PathBuf;
use std::sync::Arc;

use percent_encoding::percent_decode_str;
use serde_json::Value;
use url_generator::config::load_route_data;
use url_generator::{Router, RouterSettings, StaticPageContext};

/// Path of the route dump fixture.
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("routes.json")
}

/// The route dump fixture.
pub fn route_data() -> Value {
    load_route_data(&fixture_path()).expect("fixture should load")
}

/// Settings over the fixture, adjusted by `f`.
pub fn settings(f: impl FnOnce(&mut RouterSettings)) -> RouterSettings {
    let mut settings = RouterSettings::with_data(route_data());
    f(&mut settings);
    settings
}

/// A router over the fixture for the given page.
pub fn router_on(page_url: &str, f: impl FnOnce(&mut RouterSettings)) -> Router {
    let page = StaticPageContext::parse(page_url).expect("valid page URL");
    Router::with_context(settings(f), Arc::new(page)).expect("router should initialize")
}

/// A router over the fixture with no page context.
#[allow(dead_code)]
pub fn router(f: impl FnOnce(&mut RouterSettings)) -> Router {
    Router::new(settings(f)).expect("router should initialize")
}

/// Percent-decode a generated URL for readable assertions.
#[allow(dead_code)]
pub fn decoded(url: &str) -> String {
    percent_decode_str(url).decode_utf8_lossy().into_owned()
}
