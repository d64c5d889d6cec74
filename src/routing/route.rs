//! Route definitions.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::routing::token::Token;

/// Name of the requirement that pins a route to one scheme.
pub const SCHEME_REQUIREMENT: &str = "_scheme";

/// A default value declared for a route parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultValue {
    pub name: String,
    pub value: Value,
}

/// A constraint declared for a route parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub name: String,
    pub regex: String,
}

/// A named, parameterised URL pattern.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Route {
    pub name: String,
    pub path: String,
    pub host: String,
    pub defaults: Vec<DefaultValue>,
    pub requirements: Vec<Requirement>,
    pub schemes: Vec<String>,
    pub methods: Vec<String>,
    /// Carried but never evaluated.
    pub condition: String,
    pub tokens: Vec<Token>,
    pub host_tokens: Vec<Token>,
}

impl Route {
    /// Default declared for `name`.
    pub fn default_for(&self, name: &str) -> Option<&DefaultValue> {
        self.defaults.iter().find(|d| d.name == name)
    }

    /// Default whose *value* is the string `name`.
    ///
    /// Path building looks defaults up this way. It does not match a
    /// default declared under `name` unless its value happens to be `name`.
    pub fn default_valued(&self, name: &str) -> Option<&DefaultValue> {
        self.defaults
            .iter()
            .find(|d| d.value.as_str() == Some(name))
    }

    /// Regex of the `_scheme` requirement, if declared.
    pub fn required_scheme(&self) -> Option<&str> {
        self.requirements
            .iter()
            .find(|r| r.name == SCHEME_REQUIREMENT)
            .map(|r| r.regex.as_str())
    }

    /// First allowed scheme, if any.
    pub fn preferred_scheme(&self) -> Option<&str> {
        self.schemes.first().map(String::as_str)
    }
}
