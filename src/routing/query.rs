//! Query-string serialization.
//!
//! Flattens nested parameters with bracket notation:
//!
//! ```text
//! { test: { value: "content" } }   → ?test%5Bvalue%5D=content
//! { test: ["value", "value2"] }    → ?test%5B0%5D=value&test%5B1%5D=value2
//! { "ids[]": [1, 2] }              → ?ids%5B%5D=1&ids%5B%5D=2
//! ```

use crate::routing::encoding::encode_component;
use crate::routing::params::{ParamValue, Parameters};

/// Serialize leftover parameters. Empty input yields an empty string.
pub fn query_string(params: &Parameters) -> String {
    if params.is_empty() {
        return String::new();
    }

    let mut pairs = Vec::new();
    for (key, value) in params.iter() {
        flatten(key, value, &mut pairs);
    }

    format!("?{}", pairs.join("&"))
}

fn flatten(key: &str, value: &ParamValue, pairs: &mut Vec<String>) {
    match value {
        ParamValue::List(items) => {
            for (index, item) in items.iter().enumerate() {
                if key.ends_with("[]") {
                    push_pair(key, item, pairs);
                } else {
                    let child = format!("{}[{}]", key, list_key(index, item));
                    flatten(&child, item, pairs);
                }
            }
        }
        ParamValue::Map(entries) => {
            for (name, entry) in entries {
                flatten(&format!("{}[{}]", key, name), entry, pairs);
            }
        }
        _ => push_pair(key, value, pairs),
    }
}

// A map inside a list is keyed by its own key at the list position.
fn list_key(index: usize, item: &ParamValue) -> String {
    match item {
        ParamValue::Map(entries) => entries
            .get_index(index)
            .map(|(name, _)| name.clone())
            .unwrap_or_else(|| index.to_string()),
        _ => index.to_string(),
    }
}

fn push_pair(key: &str, value: &ParamValue, pairs: &mut Vec<String>) {
    let value = value.resolved().render();
    pairs.push(format!("{}={}", encode_component(key), encode_component(&value)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: serde_json::Value) -> Parameters {
        Parameters::from_json(value).unwrap()
    }

    #[test]
    fn test_empty() {
        assert_eq!(query_string(&Parameters::new()), "");
    }

    #[test]
    fn test_scalars() {
        let query = query_string(&params(json!({ "test": "value", "n": 2, "flag": true })));
        assert_eq!(query, "?test=value&n=2&flag=true");
    }

    #[test]
    fn test_nested_map() {
        let query = query_string(&params(json!({ "test": { "value": "content" } })));
        assert_eq!(query, "?test%5Bvalue%5D=content");
    }

    #[test]
    fn test_list() {
        let query = query_string(&params(json!({ "test": ["value", "value2"] })));
        assert_eq!(query, "?test%5B0%5D=value&test%5B1%5D=value2");
    }

    #[test]
    fn test_bracket_suffix_repeats_key() {
        let query = query_string(&params(json!({ "ids[]": [1, 2] })));
        assert_eq!(query, "?ids%5B%5D=1&ids%5B%5D=2");
    }

    #[test]
    fn test_map_in_list_uses_positional_key() {
        let query = query_string(&params(json!({
            "f": [{ "a": 1, "b": 2 }, { "x": 3, "y": 4 }]
        })));
        // element 0 is keyed "a", element 1 is keyed "y"
        assert_eq!(
            query,
            "?f%5Ba%5D%5Ba%5D=1&f%5Ba%5D%5Bb%5D=2&f%5By%5D%5Bx%5D=3&f%5By%5D%5By%5D=4"
        );
    }

    #[test]
    fn test_map_in_list_falls_back_to_index() {
        let query = query_string(&params(json!({ "f": [{ "a": 1 }, { "b": 2 }] })));
        assert_eq!(query, "?f%5Ba%5D%5Ba%5D=1&f%5B1%5D%5Bb%5D=2");
    }

    #[test]
    fn test_null_and_lazy_leaves() {
        let params = Parameters::new()
            .with("empty", ParamValue::Null)
            .with("later", ParamValue::lazy(|| vec!["a", "b"].into()));
        assert_eq!(query_string(&params), "?empty=&later=a%2Cb");
    }

    #[test]
    fn test_encodes_keys_and_values() {
        let query = query_string(&params(json!({ "q s": "a&b=c" })));
        assert_eq!(query, "?q%20s=a%26b%3Dc");
    }
}
