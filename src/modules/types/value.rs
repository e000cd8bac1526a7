//! Typed variable values

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// Variables sharing a prefix, keyed by the name with the prefix removed
pub type PrefixedGroup = IndexMap<String, TypedValue>;

/// A raw variable coerced into a typed value
///
/// Stores only ever hold strings; a `TypedValue` is produced on read and is
/// never written back as-is. [`TypedValue::to_raw_string`] gives the string
/// form used when a typed value has to go back into a store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TypedValue {
    /// `true` / `false`
    Bool(bool),
    /// Literal `null`
    Null,
    /// Numeric string without a decimal point
    Int(i64),
    /// Numeric string with a decimal point
    Float(f64),
    /// Anything else, trimmed
    String(String),
    /// JSON object
    Object(Map<String, Value>),
    /// JSON array
    Array(Vec<Value>),
    /// Comma-delimited list
    List(Vec<String>),
}

impl TypedValue {
    pub fn is_null(&self) -> bool {
        matches!(self, TypedValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            TypedValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TypedValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            TypedValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric value, widening integers
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            TypedValue::Int(i) => Some(*i as f64),
            TypedValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Convert to a JSON value
    pub fn to_json(&self) -> Value {
        match self {
            TypedValue::Bool(b) => Value::Bool(*b),
            TypedValue::Null => Value::Null,
            TypedValue::Int(i) => Value::from(*i),
            TypedValue::Float(f) => Value::from(*f),
            TypedValue::String(s) => Value::String(s.clone()),
            TypedValue::Object(map) => Value::Object(map.clone()),
            TypedValue::Array(items) => Value::Array(items.clone()),
            TypedValue::List(items) => {
                Value::Array(items.iter().cloned().map(Value::String).collect())
            }
        }
    }

    /// String form written into a store
    ///
    /// Lists are comma-joined and JSON values are serialized compactly, so
    /// reading the result back coerces to an equal value.
    pub fn to_raw_string(&self) -> String {
        match self {
            TypedValue::Bool(true) => "true".to_string(),
            TypedValue::Bool(false) => "false".to_string(),
            TypedValue::Null => "null".to_string(),
            TypedValue::Int(i) => i.to_string(),
            TypedValue::Float(f) => f.to_string(),
            TypedValue::String(s) => s.clone(),
            TypedValue::Object(_) | TypedValue::Array(_) => self.to_json().to_string(),
            TypedValue::List(items) => items.join(","),
        }
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_raw_string())
    }
}

impl From<bool> for TypedValue {
    fn from(value: bool) -> Self {
        TypedValue::Bool(value)
    }
}

impl From<i64> for TypedValue {
    fn from(value: i64) -> Self {
        TypedValue::Int(value)
    }
}

impl From<f64> for TypedValue {
    fn from(value: f64) -> Self {
        TypedValue::Float(value)
    }
}

impl From<&str> for TypedValue {
    fn from(value: &str) -> Self {
        TypedValue::String(value.to_string())
    }
}

impl From<String> for TypedValue {
    fn from(value: String) -> Self {
        TypedValue::String(value)
    }
}

impl From<Vec<String>> for TypedValue {
    fn from(value: Vec<String>) -> Self {
        TypedValue::List(value)
    }
}

impl From<Value> for TypedValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => TypedValue::Null,
            Value::Bool(b) => TypedValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => TypedValue::Int(i),
                None => TypedValue::Float(n.as_f64().unwrap_or_default()),
            },
            Value::String(s) => TypedValue::String(s),
            Value::Array(items) => TypedValue::Array(items),
            Value::Object(map) => TypedValue::Object(map),
        }
    }
}

/// Result of an array lookup
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ArrayValue {
    /// Comma-delimited segments
    List(Vec<String>),
    /// Decoded JSON array or object
    Json(Value),
    /// Prefix-extracted variables
    Group(PrefixedGroup),
}

impl Default for ArrayValue {
    fn default() -> Self {
        ArrayValue::List(Vec::new())
    }
}

impl ArrayValue {
    /// Number of top-level entries
    pub fn len(&self) -> usize {
        match self {
            ArrayValue::List(items) => items.len(),
            ArrayValue::Json(Value::Array(items)) => items.len(),
            ArrayValue::Json(Value::Object(map)) => map.len(),
            ArrayValue::Json(_) => 0,
            ArrayValue::Group(group) => group.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keys of an object or group, in order
    pub fn keys(&self) -> Vec<&str> {
        match self {
            ArrayValue::Json(Value::Object(map)) => map.keys().map(String::as_str).collect(),
            ArrayValue::Group(group) => group.keys().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            ArrayValue::List(items) => {
                Value::Array(items.iter().cloned().map(Value::String).collect())
            }
            ArrayValue::Json(value) => value.clone(),
            ArrayValue::Group(group) => Value::Object(
                group
                    .iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
        }
    }
}
