//! Schema companion for the configuration-value model.
//!
//! The platform describes each configuration property in a parallel schema
//! tree (`properties.<key>` nodes carrying `type` and `format` hints).
//! [`JsonSchema`] wraps that tree and exposes the lookups the value
//! transformations need, most notably password-format detection for
//! [`crate::JsonValues::remove_null_passwords`].

use serde_json::Value;

/// A raw schema tree describing a configuration-value document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonSchema {
    raw: Value,
}

impl JsonSchema {
    /// Wraps a raw schema tree.
    #[must_use]
    pub fn new(raw: Value) -> Self {
        Self { raw }
    }

    /// Returns the raw schema tree.
    #[must_use]
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Looks up the schema node describing a top-level property.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&Value> {
        property(&self.raw, key)
    }
}

impl From<Value> for JsonSchema {
    fn from(raw: Value) -> Self {
        Self::new(raw)
    }
}

/// Looks up `properties.<key>` in a schema node.
pub(crate) fn property<'a>(schema: &'a Value, key: &str) -> Option<&'a Value> {
    schema.get("properties").and_then(|properties| properties.get(key))
}

/// Whether a schema property describes an inheritance wrapper, i.e. an
/// object with an `inherited` member alongside the value.
pub(crate) fn wraps_inheritance(property: Option<&Value>) -> bool {
    let Some(property) = property else {
        return false;
    };
    property.get("type").and_then(Value::as_str) == Some("object")
        && property
            .get("properties")
            .and_then(|properties| properties.get("inherited"))
            .is_some()
}

/// Whether a schema property describes a collection of nested properties.
pub(crate) fn is_collection(property: Option<&Value>) -> bool {
    property.and_then(|property| property.get("properties")).is_some()
}

/// Resolves the `format` hint at a dotted path inside a schema property.
pub(crate) fn format_at<'a>(property: &'a Value, path: &[&str]) -> Option<&'a str> {
    path.iter()
        .try_fold(property, |node, segment| node.get(segment))
        .and_then(Value::as_str)
}
