//! Configuration-value inspection commands.

use std::path::Path;

use am_values::values::{collection_marker, DEFAULTS_KEY, DYNAMIC_KEY, GLOBAL_KEY};
use am_values::{JsonSchema, JsonValues};
use serde::Serialize;
use serde_json::Value;
use tabled::Tabled;

use crate::cli::ValuesCommand;
use crate::config::OutputFormat;
use crate::output::{self, warning};

/// A single configuration value with the layer it belongs to.
#[derive(Debug, Serialize, Tabled)]
struct ValueRow {
    /// Property key.
    #[tabled(rename = "Key")]
    key: String,
    /// Layer the value belongs to.
    #[tabled(rename = "Layer")]
    layer: String,
    /// Value rendered as compact JSON.
    #[tabled(rename = "Value")]
    value: String,
}

/// A bare property key row.
#[derive(Debug, Serialize, Tabled)]
struct KeyRow {
    /// Property key.
    #[tabled(rename = "Key")]
    key: String,
}

/// Runs a values command.
pub fn run_values(cmd: ValuesCommand, format: OutputFormat) -> crate::CliResult<()> {
    match cmd {
        ValuesCommand::Show { file } => show_values(&file, format),
        ValuesCommand::EmptyKeys { file } => empty_keys(&file, format),
        ValuesCommand::StripPasswords { file, schema } => {
            strip_passwords(&file, &schema, format)
        }
        ValuesCommand::Export { file } => export_values(&file, format),
    }
}

/// Loads and normalizes a configuration-value document.
fn load_values(file: &Path) -> crate::CliResult<JsonValues> {
    Ok(JsonValues::from_value(load_json(file)?)?)
}

/// Loads a JSON document from a file.
fn load_json(file: &Path) -> crate::CliResult<Value> {
    let content = std::fs::read_to_string(file)?;
    Ok(serde_json::from_str(&content)?)
}

/// Shows the layered view of a document.
fn show_values(file: &Path, format: OutputFormat) -> crate::CliResult<()> {
    let values = load_values(file)?;

    for diagnostic in values.diagnostics() {
        warning(&diagnostic.to_string());
    }

    let collection_keys: Vec<&str> = values
        .get(&collection_marker(DEFAULTS_KEY))
        .and_then(Value::as_array)
        .map(|keys| keys.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let mut rows = Vec::new();
    for (key, value) in values.raw() {
        if key.starts_with('_') {
            continue;
        }
        match (key.as_str(), value) {
            (GLOBAL_KEY | DEFAULTS_KEY | DYNAMIC_KEY, Value::Object(members)) => {
                for (member_key, member) in members {
                    rows.push(value_row(member_key, key, member)?);
                }
            }
            _ if collection_keys.contains(&key.as_str()) => {
                rows.push(value_row(key, DEFAULTS_KEY, value)?);
            }
            _ => {
                rows.push(value_row(key, GLOBAL_KEY, value)?);
            }
        }
    }

    output::output(&rows, format)
}

/// Builds a table row for one value.
fn value_row(key: &str, layer: &str, value: &Value) -> crate::CliResult<ValueRow> {
    Ok(ValueRow {
        key: key.to_string(),
        layer: layer.to_string(),
        value: serde_json::to_string(value)?,
    })
}

/// Lists keys whose value is empty.
fn empty_keys(file: &Path, format: OutputFormat) -> crate::CliResult<()> {
    let values = load_values(file)?;

    let rows: Vec<KeyRow> = values
        .empty_value_keys()
        .into_iter()
        .map(|key| KeyRow { key })
        .collect();

    output::output(&rows, format)
}

/// Removes null password values using the parallel schema and prints the
/// resulting service document.
fn strip_passwords(file: &Path, schema_file: &Path, format: OutputFormat) -> crate::CliResult<()> {
    let values = load_values(file)?;
    let schema = JsonSchema::new(load_json(schema_file)?);

    let stripped = values.remove_null_passwords(&schema);

    output::output_single(&stripped.to_value(), format)
}

/// Inverts the layered view back to the service document shape.
fn export_values(file: &Path, format: OutputFormat) -> crate::CliResult<()> {
    let original = load_json(file)?;
    let exported = JsonValues::from_value(original.clone())?.to_value();

    if exported != original {
        warning("exported document differs from the input");
    }

    output::output_single(&exported, format)
}
