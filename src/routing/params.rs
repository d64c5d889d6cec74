//! Route parameters.
//!
//! # Responsibilities
//! - Hold caller-supplied values in insertion order
//! - Render values for path segments and query strings
//! - Defer computation of a value until it is serialized (`Lazy`)

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::{Map, Number, Value};

/// A single parameter value.
#[derive(Clone)]
pub enum ParamValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    List(Vec<ParamValue>),
    Map(IndexMap<String, ParamValue>),
    /// Computed on demand.
    Lazy(Arc<dyn Fn() -> ParamValue + Send + Sync>),
}

impl ParamValue {
    pub fn lazy<F>(f: F) -> Self
    where
        F: Fn() -> ParamValue + Send + Sync + 'static,
    {
        ParamValue::Lazy(Arc::new(f))
    }

    /// The value with any `Lazy` layers evaluated.
    pub fn resolved(&self) -> ParamValue {
        let mut value = self.clone();
        while let ParamValue::Lazy(f) = &value {
            let next = f();
            value = next;
        }
        value
    }

    /// `true`, `false` and `""` count as blank.
    pub fn is_blank(&self) -> bool {
        match self.resolved() {
            ParamValue::Bool(_) => true,
            ParamValue::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Plain string rendering.
    ///
    /// Lists join their elements with commas, maps render as compact JSON.
    pub fn render(&self) -> String {
        match self {
            ParamValue::Null => String::new(),
            ParamValue::Bool(b) => b.to_string(),
            ParamValue::Number(n) => render_number(n),
            ParamValue::String(s) => s.clone(),
            ParamValue::List(items) => items
                .iter()
                .map(ParamValue::render)
                .collect::<Vec<_>>()
                .join(","),
            ParamValue::Map(_) => self.to_json().to_string(),
            ParamValue::Lazy(f) => f().render(),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            ParamValue::Null => Value::Null,
            ParamValue::Bool(b) => Value::Bool(*b),
            ParamValue::Number(n) => Value::Number(n.clone()),
            ParamValue::String(s) => Value::String(s.clone()),
            ParamValue::List(items) => Value::Array(items.iter().map(ParamValue::to_json).collect()),
            ParamValue::Map(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
            ParamValue::Lazy(f) => f().to_json(),
        }
    }
}

// Integral floats render without a fraction (1.0 -> "1").
fn render_number(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}

impl fmt::Debug for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Null => write!(f, "Null"),
            ParamValue::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            ParamValue::Number(n) => f.debug_tuple("Number").field(n).finish(),
            ParamValue::String(s) => f.debug_tuple("String").field(s).finish(),
            ParamValue::List(items) => f.debug_tuple("List").field(items).finish(),
            ParamValue::Map(map) => f.debug_tuple("Map").field(map).finish(),
            ParamValue::Lazy(_) => write!(f, "Lazy(..)"),
        }
    }
}

impl From<Value> for ParamValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => ParamValue::Null,
            Value::Bool(b) => ParamValue::Bool(b),
            Value::Number(n) => ParamValue::Number(n),
            Value::String(s) => ParamValue::String(s),
            Value::Array(items) => ParamValue::List(items.into_iter().map(Into::into).collect()),
            Value::Object(map) => {
                ParamValue::Map(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::String(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::String(s)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Bool(b)
    }
}

macro_rules! from_integer {
    ($($t:ty),*) => {
        $(impl From<$t> for ParamValue {
            fn from(n: $t) -> Self {
                ParamValue::Number(Number::from(n))
            }
        })*
    };
}

from_integer!(i32, i64, u32, u64, usize);

impl From<f64> for ParamValue {
    fn from(n: f64) -> Self {
        Number::from_f64(n).map_or(ParamValue::Null, ParamValue::Number)
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ParamValue::Null, Into::into)
    }
}

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(items: Vec<T>) -> Self {
        ParamValue::List(items.into_iter().map(Into::into).collect())
    }
}

/// Ordered map of parameter name to value.
#[derive(Debug, Clone, Default)]
pub struct Parameters(IndexMap<String, ParamValue>);

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Remove an entry, keeping the order of the rest.
    pub fn remove(&mut self, name: &str) -> Option<ParamValue> {
        self.0.shift_remove(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ParamValue)> {
        self.0.iter()
    }

    /// Parameters from a JSON object. Anything else yields `None`.
    pub fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(map.into()),
            Value::Null => Some(Self::new()),
            _ => None,
        }
    }
}

impl From<Map<String, Value>> for Parameters {
    fn from(map: Map<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render() {
        assert_eq!(ParamValue::from(1000).render(), "1000");
        assert_eq!(ParamValue::from(-1).render(), "-1");
        assert_eq!(ParamValue::from(2.0).render(), "2");
        assert_eq!(ParamValue::from(2.5).render(), "2.5");
        assert_eq!(ParamValue::Null.render(), "");
        assert_eq!(ParamValue::from(vec!["a", "b"]).render(), "a,b");
        assert_eq!(ParamValue::from(json!({ "a": 1 })).render(), r#"{"a":1}"#);
        assert_eq!(ParamValue::lazy(|| "late".into()).render(), "late");
    }

    #[test]
    fn test_blank() {
        assert!(ParamValue::from(true).is_blank());
        assert!(ParamValue::from(false).is_blank());
        assert!(ParamValue::from("").is_blank());
        assert!(ParamValue::lazy(|| "".into()).is_blank());
        assert!(!ParamValue::from(0).is_blank());
        assert!(!ParamValue::Null.is_blank());
    }

    #[test]
    fn test_parameters_keep_order() {
        let mut params = Parameters::from_json(json!({ "z": 1, "a": 2, "m": 3 })).unwrap();
        params.remove("a");
        let keys: Vec<_> = params.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["z", "m"]);

        assert!(Parameters::from_json(json!([1, 2])).is_none());
        assert!(Parameters::from_json(Value::Null).unwrap().is_empty());
    }

    #[test]
    fn test_nested_lazy_resolves() {
        let value = ParamValue::lazy(|| ParamValue::lazy(|| 7.into()));
        assert!(matches!(value.resolved(), ParamValue::Number(_)));
    }
}
