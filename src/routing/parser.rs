//! Route dump parsing.
//!
//! # Responsibilities
//! - Turn the loosely typed route dump into a `RouteCollection` in one pass
//! - Resolve the collection scheme from settings and the current page
//!
//! # Design Decisions
//! - Malformed entries are logged and dropped here, never later
//! - Token entries are `[kind, ...fields]` arrays, held either in a JSON
//!   array or in an object with ordered keys
//! - Empty strings count as absent for collection-wide values

use serde_json::Value;

use crate::config::RouterSettings;
use crate::page::PageContext;
use crate::routing::collection::RouteCollection;
use crate::routing::route::{DefaultValue, Requirement, Route};
use crate::routing::token::Token;

/// Build a collection from a raw route dump.
pub fn parse_collection(
    data: &Value,
    settings: &RouterSettings,
    page: &dyn PageContext,
) -> RouteCollection {
    let scheme = resolve_collection_scheme(data, settings, page);

    let routes = match data.get("routes").and_then(Value::as_object) {
        Some(routes) => routes
            .iter()
            .map(|(name, descriptor)| parse_route(name, descriptor))
            .collect(),
        None => {
            tracing::warn!("No routes were retrieved.");
            Vec::new()
        }
    };

    RouteCollection {
        routes,
        scheme,
        host: non_empty(data, "host").unwrap_or(settings.fallback_host.as_str()).to_string(),
        base_url: non_empty(data, "base_url")
            .unwrap_or(settings.fallback_base_url.as_str())
            .to_string(),
        logout_url: non_empty(data, "logout_url").unwrap_or_default().to_string(),
        logout_path: non_empty(data, "logout_path").unwrap_or_default().to_string(),
    }
}

/// Dump scheme (or fallback), then `force_https`, then `force_current_scheme`.
pub fn resolve_collection_scheme(
    data: &Value,
    settings: &RouterSettings,
    page: &dyn PageContext,
) -> String {
    let scheme = non_empty(data, "scheme").unwrap_or(settings.fallback_scheme.as_str());

    if settings.force_current_scheme {
        let current = page.scheme();
        if current.is_empty() {
            tracing::warn!(
                scheme = %scheme,
                "The current scheme could not be retrieved, keeping the configured scheme."
            );
            return scheme.to_string();
        }
        return current.to_string();
    }

    if settings.force_https {
        return "https".to_string();
    }

    scheme.to_string()
}

fn parse_route(name: &str, descriptor: &Value) -> Route {
    Route {
        name: name.to_string(),
        path: string_field(descriptor, "path"),
        host: string_field(descriptor, "host"),
        condition: string_field(descriptor, "condition"),
        schemes: string_list(descriptor, "schemes"),
        methods: string_list(descriptor, "methods"),
        defaults: entries(descriptor, "defaults")
            .map(|(name, value)| DefaultValue {
                name: name.clone(),
                value: value.clone(),
            })
            .collect(),
        requirements: entries(descriptor, "requirements")
            .map(|(name, regex)| Requirement {
                name: name.clone(),
                regex: regex.as_str().map_or_else(|| regex.to_string(), str::to_string),
            })
            .collect(),
        tokens: parse_tokens(name, descriptor.get("tokens")),
        host_tokens: parse_tokens(name, descriptor.get("host_tokens")),
    }
}

fn parse_tokens(route: &str, raw: Option<&Value>) -> Vec<Token> {
    let entries: Vec<&Value> = match raw {
        Some(Value::Array(items)) => items.iter().collect(),
        Some(Value::Object(map)) => map.values().collect(),
        _ => Vec::new(),
    };

    entries
        .into_iter()
        .filter_map(|entry| parse_token(route, entry))
        .collect()
}

/// `["text", text]` or `["variable", prefix, regex, name, utf8]`.
fn parse_token(route: &str, entry: &Value) -> Option<Token> {
    let fields = entry.as_array().map(Vec::as_slice).unwrap_or_default();
    let field = move |index: usize| fields.get(index).and_then(Value::as_str).unwrap_or_default();

    match field(0) {
        "variable" => Some(Token::variable(
            field(1),
            field(2),
            field(3),
            parse_flag(fields.get(4)),
        )),
        "text" => Some(Token::text(field(1))),
        kind => {
            tracing::warn!(route = %route, kind = %kind, "Unknown route token type.");
            None
        }
    }
}

// The flag arrives as a JSON boolean or as its string form.
fn parse_flag(raw: Option<&Value>) -> bool {
    match raw {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::String(s)) => serde_json::from_str(s).unwrap_or(false),
        _ => false,
    }
}

fn non_empty<'a>(data: &'a Value, key: &str) -> Option<&'a str> {
    data.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn string_field(data: &Value, key: &str) -> String {
    data.get(key).and_then(Value::as_str).unwrap_or_default().to_string()
}

fn string_list(data: &Value, key: &str) -> Vec<String> {
    data.get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn entries<'a>(data: &'a Value, key: &str) -> impl Iterator<Item = (&'a String, &'a Value)> {
    data.get(key).and_then(Value::as_object).into_iter().flatten()
}
