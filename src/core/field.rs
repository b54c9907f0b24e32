//! Structured key/value fields
//!
//! This module provides:
//! - `FieldValue`: a value attachable to a record (primitives, sequences, nested mappings)
//! - `Fields`: an insertion-ordered set of uniquely keyed values

use super::error;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// Value type for structured logging fields
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Null,
    Array(Vec<FieldValue>),
    Object(Fields),
}

impl FieldValue {
    /// Capture any serializable value as a field.
    ///
    /// A value that fails to serialize is recorded as the string
    /// `"marshaling error: <reason>"`.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Self {
        Self::try_from_serialize(value)
            .unwrap_or_else(|e| FieldValue::String(format!("marshaling error: {}", e)))
    }

    pub fn try_from_serialize<T: Serialize + ?Sized>(value: &T) -> error::Result<Self> {
        Ok(FieldValue::from(serde_json::to_value(value)?))
    }

    /// Convert to serde_json::Value for JSON serialization
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            FieldValue::String(s) => serde_json::Value::String(s.clone()),
            FieldValue::Int(i) => serde_json::Value::Number((*i).into()),
            FieldValue::UInt(u) => serde_json::Value::Number((*u).into()),
            FieldValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            FieldValue::Bool(b) => serde_json::Value::Bool(*b),
            FieldValue::Null => serde_json::Value::Null,
            FieldValue::Array(items) => {
                serde_json::Value::Array(items.iter().map(FieldValue::to_json_value).collect())
            }
            FieldValue::Object(fields) => serde_json::Value::Object(fields.to_json_map()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::UInt(u) => write!(f, "{}", u),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Null => write!(f, "null"),
            FieldValue::Array(_) | FieldValue::Object(_) => write!(f, "{}", self.to_json_value()),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<&String> for FieldValue {
    fn from(s: &String) -> Self {
        FieldValue::String(s.clone())
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty, $($t:ty),+) => {
        $(
            impl From<$t> for FieldValue {
                fn from(v: $t) -> Self {
                    FieldValue::$variant(v as $target)
                }
            }
        )+
    };
}

impl_from_int!(Int, i64, i8, i16, i32, i64, isize);
impl_from_int!(UInt, u64, u8, u16, u32, u64, usize);

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<f32> for FieldValue {
    fn from(f: f32) -> Self {
        FieldValue::Float(f64::from(f))
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(items: Vec<T>) -> Self {
        FieldValue::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<Fields> for FieldValue {
    fn from(fields: Fields) -> Self {
        FieldValue::Object(fields)
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => FieldValue::Null,
            serde_json::Value::Bool(b) => FieldValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    FieldValue::Int(i)
                } else if let Some(u) = n.as_u64() {
                    FieldValue::UInt(u)
                } else {
                    n.as_f64().map(FieldValue::Float).unwrap_or(FieldValue::Null)
                }
            }
            serde_json::Value::String(s) => FieldValue::String(s),
            serde_json::Value::Array(items) => {
                FieldValue::Array(items.into_iter().map(FieldValue::from).collect())
            }
            serde_json::Value::Object(map) => FieldValue::Object(map.into_iter().collect()),
        }
    }
}

/// Insertion-ordered key/value set with unique keys.
///
/// Setting an existing key replaces its value in place, so output order is
/// the order in which keys were first set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields {
    entries: Vec<(String, FieldValue)>,
}

impl Fields {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a field (builder form)
    #[must_use]
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.add_field(key, value);
        self
    }

    /// Add or overwrite a field
    pub fn add_field<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Copy of `self` with every field of `other` applied on top.
    ///
    /// Keys present in both keep their position from `self` and take the
    /// value from `other`.
    #[must_use]
    pub fn merged_with(&self, other: &Fields) -> Fields {
        let mut merged = self.clone();
        for (key, value) in other.iter() {
            merged.add_field(key, value.clone());
        }
        merged
    }

    pub fn to_json_map(&self) -> serde_json::Map<String, serde_json::Value> {
        self.iter()
            .map(|(k, v)| (k.to_string(), v.to_json_value()))
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Fields
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Fields::new();
        for (key, value) in iter {
            fields.add_field(key, value);
        }
        fields
    }
}

impl Serialize for Fields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_creation() {
        let fields = Fields::new();
        assert!(fields.is_empty());
    }

    #[test]
    fn test_fields_keep_insertion_order() {
        let fields = Fields::new()
            .with_field("zeta", 1)
            .with_field("alpha", 2)
            .with_field("mid", 3);

        let keys: Vec<&str> = fields.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_fields_overwrite_in_place() {
        let fields = Fields::new()
            .with_field("a", "first")
            .with_field("b", 2)
            .with_field("a", "second");

        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("a"), Some(&FieldValue::from("second")));
        assert_eq!(fields.iter().next().map(|(k, _)| k), Some("a"));
    }

    #[test]
    fn test_merged_with_priority() {
        let permanent = Fields::new()
            .with_field("service", "api")
            .with_field("key", "logger_value");
        let call = Fields::new().with_field("key", "entry_value");

        let merged = permanent.merged_with(&call);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged.get("key"), Some(&FieldValue::from("entry_value")));
        // source sets are untouched
        assert_eq!(permanent.get("key"), Some(&FieldValue::from("logger_value")));
    }

    #[test]
    fn test_remove() {
        let mut fields = Fields::new().with_field("a", 1).with_field("b", 2);
        assert_eq!(fields.remove("a"), Some(FieldValue::Int(1)));
        assert_eq!(fields.remove("a"), None);
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn test_nested_values_to_json() {
        let value = FieldValue::from(
            Fields::new()
                .with_field("ids", vec![1, 2, 3])
                .with_field("owner", Fields::new().with_field("name", "alice")),
        );

        assert_eq!(
            value.to_json_value(),
            serde_json::json!({"ids": [1, 2, 3], "owner": {"name": "alice"}})
        );
    }

    #[test]
    fn test_from_json_value() {
        let value = FieldValue::from(serde_json::json!({
            "n": -3,
            "big": u64::MAX,
            "ratio": 0.5,
            "tags": ["x", null]
        }));

        match value {
            FieldValue::Object(fields) => {
                assert_eq!(fields.get("n"), Some(&FieldValue::Int(-3)));
                assert_eq!(fields.get("big"), Some(&FieldValue::UInt(u64::MAX)));
                assert_eq!(fields.get("ratio"), Some(&FieldValue::Float(0.5)));
                assert_eq!(
                    fields.get("tags"),
                    Some(&FieldValue::Array(vec![
                        FieldValue::from("x"),
                        FieldValue::Null
                    ]))
                );
            }
            other => panic!("expected object, got {:?}", other),
        }
    }

    #[test]
    fn test_from_serialize() {
        #[derive(serde::Serialize)]
        struct Point {
            x: i32,
            y: i32,
        }

        let value = FieldValue::from_serialize(&Point { x: 1, y: -2 });
        assert_eq!(value.to_string(), r#"{"x":1,"y":-2}"#);
    }

    #[test]
    fn test_from_serialize_failure() {
        let mut map = std::collections::HashMap::new();
        map.insert((1, 2), "tuple keys are not JSON keys");

        let value = FieldValue::from_serialize(&map);
        match value {
            FieldValue::String(s) => assert!(s.starts_with("marshaling error: ")),
            other => panic!("expected fallback string, got {:?}", other),
        }
        assert!(matches!(
            FieldValue::try_from_serialize(&map),
            Err(error::LoggerError::JsonError(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(FieldValue::from("plain").to_string(), "plain");
        assert_eq!(FieldValue::from(42).to_string(), "42");
        assert_eq!(FieldValue::from(None::<i32>).to_string(), "null");
        assert_eq!(FieldValue::from(vec!["a", "b"]).to_string(), r#"["a","b"]"#);
    }

    #[test]
    fn test_serialize_fields_as_map() {
        let fields = Fields::new().with_field("b", 1).with_field("a", true);
        assert_eq!(serde_json::to_string(&fields).unwrap(), r#"{"b":1,"a":true}"#);
    }
}
