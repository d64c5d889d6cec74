//! Configuration schema definitions.
//!
//! This module defines the router settings. All types derive Serde traits
//! for deserialization from config files.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Settings for a [`Router`](crate::routing::Router).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterSettings {
    /// Raw route dump (`routes`, `scheme`, `host`, `base_url`, ...).
    pub data: Value,

    /// Emit a debug event for every generated path and URL.
    pub debug: bool,

    /// Forces the `https` scheme. No effect if `force_current_scheme` is set.
    pub force_https: bool,

    /// Uses the scheme of the current page.
    pub force_current_scheme: bool,

    /// Scheme used when the route dump has none.
    pub fallback_scheme: String,

    /// Base URL used when the route dump has none.
    pub fallback_base_url: String,

    /// Host used when the route dump has none.
    pub fallback_host: String,

    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for RouterSettings {
    fn default() -> Self {
        Self {
            data: Value::Object(Default::default()),
            debug: false,
            force_https: false,
            force_current_scheme: false,
            fallback_scheme: "https".to_string(),
            fallback_base_url: String::new(),
            fallback_host: String::new(),
            log_level: "info".to_string(),
        }
    }
}

impl RouterSettings {
    /// Settings wrapping the given route dump, everything else defaulted.
    pub fn with_data(data: Value) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }
}
