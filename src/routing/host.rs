//! Host and scheme resolution for absolute URLs.
//!
//! # Scheme precedence
//! 1. `_scheme` requirement, when it differs from the collection scheme
//! 2. First declared route scheme, when it differs from the collection scheme
//! 3. Collection scheme
//!
//! The host is the rendered host pattern, or the collection host when the
//! route has none.

use std::collections::VecDeque;

use crate::error::{RouterError, RouterResult};
use crate::routing::collection::RouteCollection;
use crate::routing::params::{ParamValue, Parameters};
use crate::routing::route::Route;
use crate::routing::token::Token;

/// Render the host pattern of `route`. Empty if it declares none.
///
/// Host variables do not consume parameters; they still reach the query string.
pub fn build_host(route: &Route, params: &Parameters) -> RouterResult<String> {
    let mut segments: VecDeque<String> = VecDeque::with_capacity(route.host_tokens.len());

    for token in &route.host_tokens {
        match token {
            Token::Text(text) => segments.push_front(text.text.clone()),
            Token::Variable(variable) => {
                let value = match params.get(&variable.name) {
                    Some(value) => value.render(),
                    None => route
                        .default_for(&variable.name)
                        .map(|d| ParamValue::from(d.value.clone()).render())
                        .unwrap_or_default(),
                };
                segments.push_front(format!("{}{}", variable.prefix, value));
            }
            Token::Opaque(_) => return Err(RouterError::UnsupportedToken(token.describe())),
        }
    }

    Ok(segments.into_iter().collect())
}

/// Pick the scheme to generate `route` with.
pub fn resolve_scheme<'a>(route: &'a Route, collection: &'a RouteCollection) -> &'a str {
    let configured = collection.scheme.as_str();
    let differs = |scheme: &&str| !scheme.is_empty() && *scheme != configured;

    route
        .required_scheme()
        .filter(differs)
        .or_else(|| route.preferred_scheme().filter(differs))
        .unwrap_or(configured)
}

/// `<scheme:>//<host>`, the scheme left out when `scheme_relative`.
pub fn scheme_and_host(
    route: &Route,
    collection: &RouteCollection,
    host: &str,
    scheme_relative: bool,
) -> String {
    let host = if host.is_empty() { collection.host.as_str() } else { host };

    if scheme_relative {
        format!("//{}", host)
    } else {
        format!("{}://{}", resolve_scheme(route, collection), host)
    }
}
