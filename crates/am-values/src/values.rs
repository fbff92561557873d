//! Layered configuration-value documents.
//!
//! The platform emits service configuration in three layers:
//!
//! ```json
//! {
//!   "globalProperty": true,
//!   "defaults": { "...": "realm-level values" },
//!   "dynamic": { "...": "user-level values" }
//! }
//! ```
//!
//! [`JsonValues`] normalizes such a document for editing: top-level simple
//! values are grouped under a synthetic `global` bucket, and collection
//! properties nested under `defaults` are hoisted to the top level with
//! their origin recorded under `_defaultsCollectionProperties`.
//! [`JsonValues::to_value`] inverts the normalization exactly.

use std::collections::HashMap;
use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::node;
use crate::schema::{self, JsonSchema};

/// Synthetic bucket collecting top-level simple values.
pub const GLOBAL_KEY: &str = "global";

/// Layer key for realm-level values.
pub const DEFAULTS_KEY: &str = "defaults";

/// Layer key for user-level values.
pub const DYNAMIC_KEY: &str = "dynamic";

/// Marker key recording which properties were hoisted out of a group,
/// e.g. `_defaultsCollectionProperties`.
#[must_use]
pub fn collection_marker(group: &str) -> String {
    format!("_{group}CollectionProperties")
}

/// Non-fatal finding produced while normalizing a document's layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Properties were found in a layer group that do not belong to any
    /// collection property. They remain nested under the group.
    UngroupedProperties {
        /// The layer group the properties were found in.
        group: String,
        /// The offending property keys.
        keys: Vec<String>,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UngroupedProperties { group, keys } => write!(
                f,
                "properties in '{group}' do not belong to any group: [{}]",
                keys.join(", ")
            ),
        }
    }
}

/// An immutable, layered configuration-value document.
///
/// Every transforming method returns a new instance; the wrapped tree is
/// never mutated. Equality compares the raw tree only, construction
/// diagnostics are metadata.
#[derive(Debug, Clone)]
pub struct JsonValues {
    raw: Map<String, Value>,
    diagnostics: Vec<Diagnostic>,
}

impl PartialEq for JsonValues {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for JsonValues {}

impl Serialize for JsonValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl JsonValues {
    /// Wraps a raw document, normalizing its layers.
    ///
    /// When the document carries a `defaults` or `dynamic` layer, top-level
    /// simple values (not objects, not arrays, not `_`-prefixed, not the
    /// `defaults` key itself) are grouped under [`GLOBAL_KEY`]. When it
    /// carries `defaults`, that layer's collection properties are hoisted to
    /// the top level and recorded under `_defaultsCollectionProperties`; an
    /// empty `defaults` left behind is deleted. Documents without either
    /// layer pass through unchanged.
    ///
    /// `defaults` members outside any collection are reported as
    /// [`Diagnostic::UngroupedProperties`] and logged at warn level.
    #[must_use]
    pub fn new(raw: Map<String, Value>) -> Self {
        let mut diagnostics = Vec::new();
        let has_defaults = raw.contains_key(DEFAULTS_KEY);
        let has_dynamic = raw.contains_key(DYNAMIC_KEY);

        let mut raw = raw;
        if has_defaults || has_dynamic {
            raw = group_top_level_simple_values(raw);
        }
        if has_defaults {
            raw = ungroup_collection_properties(raw, DEFAULTS_KEY, &mut diagnostics);
        }

        Self { raw, diagnostics }
    }

    /// Wraps a raw JSON value, which must be an object at the root.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self::new(map)),
            other => Err(Error::NotAnObject(node::kind(&other))),
        }
    }

    /// Returns the normalized raw tree.
    #[must_use]
    pub fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }

    /// Looks up a top-level value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.raw.get(key)
    }

    /// Returns the diagnostics collected while normalizing the layers.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Wraps every top-level value as `{value, inherited}` using the
    /// caller-supplied flags.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::MissingInheritance`] if the map lacks a flag for
    /// any key present in the tree.
    pub fn add_inheritance(&self, inheritance: &HashMap<String, bool>) -> Result<Self> {
        let mut wrapped = Map::new();
        for (key, value) in &self.raw {
            let inherited = *inheritance
                .get(key)
                .ok_or_else(|| Error::MissingInheritance(key.clone()))?;
            let mut entry = Map::new();
            entry.insert("value".to_string(), value.clone());
            entry.insert("inherited".to_string(), Value::Bool(inherited));
            wrapped.insert(key.clone(), Value::Object(entry));
        }
        Ok(Self::new(wrapped))
    }

    /// Sets `raw[path][key] = value` on a deep copy of the tree.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::NotAnObjectProperty`] if `raw[path]` is absent or
    /// not an object.
    pub fn add_value_for_key(&self, path: &str, key: &str, value: Value) -> Result<Self> {
        let mut clone = self.raw.clone();
        match clone.get_mut(path) {
            Some(Value::Object(entry)) => {
                entry.insert(key.to_string(), value);
            }
            _ => return Err(Error::NotAnObjectProperty(path.to_string())),
        }
        Ok(Self::new(clone))
    }

    /// Shallow-merges extra top-level entries; the argument wins on
    /// conflicting keys.
    #[must_use]
    pub fn extend(&self, object: Map<String, Value>) -> Self {
        let mut merged = self.raw.clone();
        merged.extend(object);
        Self::new(merged)
    }

    /// Returns the keys whose value is empty per [`node::is_empty_value`]:
    /// numbers and booleans are never empty, everything else uses
    /// structural emptiness.
    #[must_use]
    pub fn empty_value_keys(&self) -> Vec<String> {
        self.raw
            .iter()
            .filter(|(_, value)| node::is_empty_value(value))
            .map(|(key, _)| key.clone())
            .collect()
    }

    /// Drops the named top-level keys.
    #[must_use]
    pub fn omit_keys(&self, keys: &[&str]) -> Self {
        self.omit_by(|key, _| keys.contains(&key))
    }

    /// Keeps only the named top-level keys.
    #[must_use]
    pub fn pick_keys(&self, keys: &[&str]) -> Self {
        self.pick_by(|key, _| keys.contains(&key))
    }

    /// Drops top-level entries for which the predicate holds.
    #[must_use]
    pub fn omit_by(&self, predicate: impl Fn(&str, &Value) -> bool) -> Self {
        self.pick_by(|key, value| !predicate(key, value))
    }

    /// Keeps only top-level entries for which the predicate holds.
    #[must_use]
    pub fn pick_by(&self, predicate: impl Fn(&str, &Value) -> bool) -> Self {
        let picked = self
            .raw
            .iter()
            .filter(|(key, value)| predicate(key, value))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        Self::new(picked)
    }

    /// Strips the `{value, inherited}` wrapper from every top-level entry,
    /// keeping only the inner value. Entries without a `value` member map
    /// to `null`.
    #[must_use]
    pub fn remove_inheritance(&self) -> Self {
        let stripped = self
            .raw
            .iter()
            .map(|(key, value)| {
                (key.clone(), value.get("value").cloned().unwrap_or(Value::Null))
            })
            .collect();
        Self::new(stripped)
    }

    /// Removes null password values, guided by the parallel schema.
    ///
    /// For properties whose schema format is `"password"`: with an
    /// inheritance wrapper, a null value keeps only the inheritance flag;
    /// without one, a null password is dropped entirely. Collection
    /// properties recurse with the corresponding nested schema. Keys absent
    /// from the schema pass through verbatim.
    #[must_use]
    pub fn remove_null_passwords(&self, schema: &JsonSchema) -> Self {
        Self::new(omit_null_passwords(&self.raw, schema.raw()))
    }

    /// Inverts the layer normalization performed at construction.
    ///
    /// Keys listed under `_defaultsCollectionProperties` are nested back
    /// under `defaults` and the marker is dropped, then the synthetic
    /// `global` bucket is flattened back to the top level. No key-ordering
    /// guarantee is made.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut json = self.raw.clone();
        let marker = collection_marker(DEFAULTS_KEY);

        let collection_keys = marker_keys(&json, &marker);
        if !collection_keys.is_empty() {
            let mut defaults = match json.get(DEFAULTS_KEY) {
                Some(Value::Object(members)) => members.clone(),
                _ => Map::new(),
            };
            for key in &collection_keys {
                if let Some(value) = json.remove(key) {
                    defaults.insert(key.clone(), value);
                }
            }
            json.insert(DEFAULTS_KEY.to_string(), Value::Object(defaults));
            json.remove(&marker);
        }

        match json.remove(GLOBAL_KEY) {
            Some(Value::Object(global)) => {
                for (key, value) in global {
                    json.insert(key, value);
                }
            }
            Some(_) | None => {}
        }

        Value::Object(json)
    }

    /// Serializes the inverted document as JSON text.
    ///
    /// # Errors
    ///
    /// Fails if the tree cannot be serialized.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_value())?)
    }
}

/// Reads a collection-properties marker as a list of keys.
fn marker_keys(json: &Map<String, Value>, marker: &str) -> Vec<String> {
    match json.get(marker) {
        Some(Value::Array(keys)) => keys
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

/// Groups top-level simple values under the synthetic `global` bucket.
///
/// Objects, arrays, `_`-prefixed keys and the `defaults` key stay at the
/// top level. Returns the input unchanged when there is nothing to group.
fn group_top_level_simple_values(raw: Map<String, Value>) -> Map<String, Value> {
    let simple_keys: Vec<String> = raw
        .iter()
        .filter(|(key, value)| {
            !key.starts_with('_')
                && key.as_str() != DEFAULTS_KEY
                && !node::is_pure_object(value)
                && !value.is_array()
        })
        .map(|(key, _)| key.clone())
        .collect();

    if simple_keys.is_empty() {
        return raw;
    }

    let mut grouped = Map::new();
    let mut global = Map::new();
    for (key, value) in raw {
        if simple_keys.contains(&key) {
            global.insert(key, value);
        } else {
            grouped.insert(key, value);
        }
    }
    grouped.insert(GLOBAL_KEY.to_string(), Value::Object(global));

    grouped
}

/// Hoists a group's collection properties (nested objects) to the top
/// level, recording their keys under the group's marker.
///
/// Returns the input unchanged when the group has no nested-object members.
/// An empty group left behind is deleted. Group members outside any
/// collection are reported and stay nested under the group.
fn ungroup_collection_properties(
    mut raw: Map<String, Value>,
    group_key: &str,
    diagnostics: &mut Vec<Diagnostic>,
) -> Map<String, Value> {
    let Some(Value::Object(group)) = raw.get(group_key) else {
        return raw;
    };

    let collection: Map<String, Value> = group
        .iter()
        .filter(|(_, value)| node::is_pure_object(value))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    if collection.is_empty() {
        return raw;
    }

    let collection_keys: Vec<String> = collection.keys().cloned().collect();
    let non_grouped: Vec<String> = group
        .keys()
        .filter(|key| !collection_keys.contains(key))
        .cloned()
        .collect();
    if !non_grouped.is_empty() {
        tracing::warn!(
            group = group_key,
            properties = ?non_grouped,
            "detected properties which do not belong to any group; \
             they will remain under the group"
        );
        diagnostics.push(Diagnostic::UngroupedProperties {
            group: group_key.to_string(),
            keys: non_grouped.clone(),
        });
    }

    let remaining: Map<String, Value> = group
        .iter()
        .filter(|(key, _)| !collection_keys.contains(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    for (key, value) in collection {
        raw.insert(key, value);
    }
    raw.insert(
        collection_marker(group_key),
        Value::Array(collection_keys.into_iter().map(Value::String).collect()),
    );

    if remaining.is_empty() {
        raw.remove(group_key);
    } else {
        raw.insert(group_key.to_string(), Value::Object(remaining));
    }

    raw
}

/// Whether a value is null and its schema property carries a `"password"`
/// format hint at the given path.
fn is_null_password(value: Option<&Value>, property: Option<&Value>, path: &[&str]) -> bool {
    matches!(value, Some(Value::Null))
        && property.is_some_and(|property| schema::format_at(property, path) == Some("password"))
}

/// Recursive worker for [`JsonValues::remove_null_passwords`].
fn omit_null_passwords(values: &Map<String, Value>, schema: &Value) -> Map<String, Value> {
    let mut result = Map::new();
    for (key, value) in values {
        let property = schema::property(schema, key);
        if schema::wraps_inheritance(property) {
            if is_null_password(value.get("value"), property, &["properties", "value", "format"]) {
                // Keep only the inheritance flag.
                let mut wrapper = Map::new();
                if let Some(inherited) = value.get("inherited") {
                    wrapper.insert("inherited".to_string(), inherited.clone());
                }
                result.insert(key.clone(), Value::Object(wrapper));
            } else {
                result.insert(key.clone(), value.clone());
            }
        } else if schema::is_collection(property) {
            match (value, property) {
                (Value::Object(nested), Some(nested_schema)) => {
                    result.insert(
                        key.clone(),
                        Value::Object(omit_null_passwords(nested, nested_schema)),
                    );
                }
                _ => {
                    result.insert(key.clone(), value.clone());
                }
            }
        } else if is_null_password(Some(value), property, &["format"]) {
            // Null passwords without inheritance are dropped outright.
        } else {
            result.insert(key.clone(), value.clone());
        }
    }
    result
}
