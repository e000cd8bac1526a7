//! Coercion of raw store values into typed values
//!
//! Two ladders exist. [`scalar`] recognises numbers, `true`, `false`, `null`
//! and the empty string; everything else comes back as a trimmed string.
//! [`typed`] runs the scalar ladder and then tries JSON and comma-delimited
//! lists on whatever is still a string.

use envref_types::TypedValue;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Numeric strings: optional sign, digits with an optional fraction, optional exponent
static NUMERIC_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?\s*$").unwrap()
});

/// Scalar ladder
///
/// `None` (no such variable) and blank values give `default`.
pub fn scalar(raw: Option<&str>, default: TypedValue) -> TypedValue {
    let Some(raw) = raw else {
        return default;
    };

    if let Some(number) = parse_numeric(raw) {
        return number;
    }

    let trimmed = raw.trim();
    match trimmed.to_lowercase().as_str() {
        "true" => TypedValue::Bool(true),
        "false" => TypedValue::Bool(false),
        "null" => TypedValue::Null,
        "" => default,
        _ => TypedValue::String(trimmed.to_string()),
    }
}

/// Full ladder: scalar, then JSON object/array, then comma list
///
/// A literal `null` gives `default`, the same as a missing variable.
pub fn typed(raw: Option<&str>, default: TypedValue) -> TypedValue {
    match scalar(raw, default.clone()) {
        TypedValue::Null => default,
        TypedValue::String(s) => structured(&s).unwrap_or(TypedValue::String(s)),
        other => other,
    }
}

fn structured(value: &str) -> Option<TypedValue> {
    decode_json(value)
        .map(TypedValue::from)
        .or_else(|| split_list(value).map(TypedValue::List))
}

/// Parse a numeric string
///
/// A decimal point makes it a float. Exponent forms without one are integers
/// when they fit in an `i64`.
pub fn parse_numeric(raw: &str) -> Option<TypedValue> {
    if !NUMERIC_PATTERN.is_match(raw) {
        return None;
    }

    let trimmed = raw.trim();
    if trimmed.contains('.') {
        return trimmed.parse::<f64>().ok().map(TypedValue::Float);
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return Some(TypedValue::Int(i));
    }

    let f = trimmed.parse::<f64>().ok()?;
    if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        Some(TypedValue::Int(f as i64))
    } else {
        Some(TypedValue::Float(f))
    }
}

/// Decode a JSON object or array
///
/// The value must be bracketed on both ends; JSON scalars are rejected.
pub fn decode_json(value: &str) -> Option<Value> {
    let trimmed = value.trim();
    if !(trimmed.starts_with(['[', '{']) && trimmed.ends_with([']', '}'])) {
        return None;
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(decoded @ (Value::Array(_) | Value::Object(_))) => Some(decoded),
        _ => None,
    }
}

/// Split on commas when at least two segments are non-empty
///
/// Segments are returned verbatim, empty ones included.
pub fn split_list(value: &str) -> Option<Vec<String>> {
    let segments: Vec<&str> = value.split(',').collect();
    let filled = segments.iter().filter(|s| !s.is_empty()).count();
    if filled > 1 {
        Some(segments.into_iter().map(str::to_string).collect())
    } else {
        None
    }
}
