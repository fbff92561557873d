//! Classification helpers for JSON value nodes.

use serde_json::Value;

/// Returns `true` only for plain JSON objects.
///
/// Arrays and scalars are not pure objects, matching the classification the
/// layer-normalization code uses to tell collection properties apart from
/// simple values.
#[must_use]
pub fn is_pure_object(value: &Value) -> bool {
    value.is_object()
}

/// Emptiness rule for configuration values.
///
/// Numbers and booleans are never empty (`0` and `false` are meaningful
/// settings). All other types use structural emptiness: the empty string,
/// the empty array, the empty object, and `null` are empty.
#[must_use]
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(_) | Value::Number(_) => false,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(members) => members.is_empty(),
    }
}

/// Human-readable name for a JSON value's type, used in error messages.
#[must_use]
pub fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
