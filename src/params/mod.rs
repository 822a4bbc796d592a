//! Transformation parameters attached to an image request
//!
//! [`Parameters`] keeps insertion order so the display query string follows
//! the order parameters arrived in. Alias handling lives in [`aliases`].

pub mod aliases;

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

pub use aliases::AliasTable;

/// Parameter name reserved for the request signature.
pub const SECURITY_TOKEN_PARAM: &str = "s";

/// Ordered mapping from parameter name to a primitive value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Parameters(Map<String, Value>);

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a form-urlencoded query string. A leading `?` is ignored.
    ///
    /// Repeated names keep the last value at the position of the first
    /// occurrence. Every value is a string.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        url::form_urlencoded::parse(query.as_bytes())
            .filter(|(k, _)| !k.is_empty())
            .map(|(k, v)| (k.into_owned(), Value::String(v.into_owned())))
            .collect()
    }

    /// Parse a JSON object such as `{"w": 100, "fm": "webp"}`.
    ///
    /// Values must be primitives; nested arrays and objects are rejected.
    pub fn from_json(json: &str) -> Result<Self> {
        let map = match serde_json::from_str::<Value>(json)? {
            Value::Object(map) => map,
            other => {
                return Err(Error::Other(format!(
                    "Parameters must be a JSON object, got: {}",
                    other
                )));
            }
        };

        if let Some((key, _)) = map
            .iter()
            .find(|(_, v)| matches!(v, Value::Array(_) | Value::Object(_)))
        {
            return Err(Error::Other(format!(
                "Parameter '{}' must be a string, number, boolean or null",
                key
            )));
        }

        Ok(Self(map))
    }

    /// Insert a value, returning the previous one. An existing key keeps its
    /// position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[cfg(test)]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Remove a key, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

/// Render a parameter value as text: strings verbatim, everything else in
/// its JSON form.
///
/// Floats with no fractional part drop the trailing `.0` (`100.0` renders as
/// `100`, `-0.0` as `0`), the same text a JavaScript number produces.
pub fn value_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        Value::Number(n) if n.is_f64() => match n.as_f64() {
            Some(f) if f == 0.0 => Cow::Borrowed("0"),
            Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => Cow::Owned(format!("{}", f)),
            _ => Cow::Owned(n.to_string()),
        },
        other => Cow::Owned(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_query_basic() {
        let params = Parameters::from_query("?w=100&fm=webp");
        assert_eq!(params.get("w"), Some(&json!("100")));
        assert_eq!(params.get("fm"), Some(&json!("webp")));
        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["w", "fm"]);
    }

    #[test]
    fn test_from_query_decodes() {
        let params = Parameters::from_query("bg=%23fff&text=a+b");
        assert_eq!(params.get("bg"), Some(&json!("#fff")));
        assert_eq!(params.get("text"), Some(&json!("a b")));
    }

    #[test]
    fn test_from_query_duplicate_keeps_first_position() {
        let params = Parameters::from_query("w=1&h=2&w=3");
        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["w", "h"]);
        assert_eq!(params.get("w"), Some(&json!("3")));
    }

    #[test]
    fn test_from_query_empty() {
        assert!(Parameters::from_query("").is_empty());
        assert!(Parameters::from_query("?").is_empty());
        assert!(Parameters::from_query("&&=x").is_empty());
    }

    #[test]
    fn test_from_json_object() {
        let params = Parameters::from_json(r#"{"w": 100, "grayscale": true}"#).unwrap();
        assert_eq!(params.get("w"), Some(&json!(100)));
        assert_eq!(params.get("grayscale"), Some(&json!(true)));
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        assert!(matches!(Parameters::from_json("[1, 2]"), Err(Error::Other(_))));
        assert!(matches!(Parameters::from_json("{"), Err(Error::Json(_))));
    }

    #[test]
    fn test_from_json_rejects_nested_values() {
        let err = Parameters::from_json(r#"{"w": 100, "crop": {"x": 1}}"#).unwrap_err();
        assert!(matches!(err, Error::Other(_)));
        assert!(err.to_string().contains("'crop'"));

        let err = Parameters::from_json(r#"{"size": [1, 2]}"#).unwrap_err();
        assert!(err.to_string().contains("'size'"));

        assert!(Parameters::from_json(r#"{"bg": null, "q": 0.8, "fm": "png"}"#).is_ok());
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut params: Parameters = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
        assert_eq!(params.remove("a"), Some(json!(1)));
        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["b", "c"]);
    }

    #[test]
    fn test_value_text() {
        assert_eq!(value_text(&json!("webp")), "webp");
        assert_eq!(value_text(&json!(100)), "100");
        assert_eq!(value_text(&json!(0.5)), "0.5");
        assert_eq!(value_text(&json!(false)), "false");
        assert_eq!(value_text(&Value::Null), "null");
    }

    #[test]
    fn test_value_text_integral_floats() {
        assert_eq!(value_text(&json!(100.0)), "100");
        assert_eq!(value_text(&json!(-3.0)), "-3");
        assert_eq!(value_text(&json!(-0.0)), "0");
        assert_eq!(value_text(&json!(2.5)), "2.5");
        assert_eq!(value_text(&json!(1e21)), "1e21");
    }
}
