//! Path building.
//!
//! # Responsibilities
//! - Walk a route's path tokens, substituting parameters and defaults
//! - Drop blank values inside an optional run
//! - Report which parameters were not consumed (they become the query string)
//!
//! # Design Decisions
//! - Tokens are walked in stored order and every fragment is prepended
//! - Defaults are matched by value, not by name (see `Route::default_valued`)
//! - The caller's parameters are never modified; consumption is tracked on a copy

use std::collections::VecDeque;

use crate::error::{RouterError, RouterResult};
use crate::routing::encoding::encode_path;
use crate::routing::params::{ParamValue, Parameters};
use crate::routing::query::query_string;
use crate::routing::route::{DefaultValue, Route};
use crate::routing::token::Token;

/// Output of a path walk.
#[derive(Debug, Clone)]
pub struct BuiltPath {
    /// Rendered path, empty if no token emitted anything.
    pub path: String,
    /// Supplied parameters no path variable consumed.
    pub unused: Parameters,
}

impl BuiltPath {
    /// `base_url` + path (or `/`) + query string of the unused parameters.
    pub fn render(&self, base_url: &str) -> String {
        let path = if self.path.is_empty() { "/" } else { &self.path };
        format!("{}{}{}", base_url, path, query_string(&self.unused))
    }
}

/// Substitute `params` into the path tokens of `route`.
pub fn build_path(route: &Route, params: &Parameters) -> RouterResult<BuiltPath> {
    let mut segments: VecDeque<String> = VecDeque::with_capacity(route.tokens.len());
    let mut unused = params.clone();
    let mut optional = false;

    for token in &route.tokens {
        let variable = match token {
            Token::Text(text) => {
                segments.push_front(text.text.clone());
                optional = false;
                continue;
            }
            Token::Variable(variable) => variable,
            Token::Opaque(_) => return Err(RouterError::UnsupportedToken(token.describe())),
        };

        let name = variable.name.as_str();
        let default = route.default_valued(name);
        let supplied = params.get(name);

        let substitute = !optional
            || default.is_none()
            || supplied.is_some_and(|value| differs(value, default));

        if !substitute {
            if default.is_some() {
                unused.remove(name);
            }
            continue;
        }

        let value = if let Some(value) = supplied {
            unused.remove(name);
            value.resolved()
        } else if let Some(default) = default {
            ParamValue::from(default.value.clone())
        } else if optional {
            continue;
        } else {
            return Err(RouterError::MissingParameter {
                route: route.name.clone(),
                parameter: name.to_string(),
            });
        };

        if !(optional && value.is_blank()) {
            segments.push_front(format!("{}{}", variable.prefix, encode_path(&value.render())));
        }

        optional = false;
    }

    Ok(BuiltPath {
        path: segments.into_iter().collect(),
        unused,
    })
}

fn differs(value: &ParamValue, default: Option<&DefaultValue>) -> bool {
    match default {
        Some(default) => value.render() != ParamValue::from(default.value.clone()).render(),
        None => true,
    }
}
