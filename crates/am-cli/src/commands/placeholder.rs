//! Placeholder utilities.

use std::path::Path;

use am_placeholder::{extract_placeholders, is_placeholder_str};
use serde::Serialize;
use serde_json::Value;
use tabled::Tabled;

use crate::cli::PlaceholderCommand;
use crate::config::OutputFormat;
use crate::output::{self, info, success};

/// A placeholder reference found in a document.
#[derive(Debug, Serialize, Tabled)]
struct PlaceholderRow {
    /// Property key the placeholder was found under.
    #[tabled(rename = "Key")]
    key: String,
    /// The placeholder reference.
    #[tabled(rename = "Placeholder")]
    placeholder: String,
}

/// Runs a placeholder command.
pub fn run_placeholder(cmd: PlaceholderCommand, format: OutputFormat) -> crate::CliResult<()> {
    match cmd {
        PlaceholderCommand::Check { value } => check_placeholder(&value),
        PlaceholderCommand::Extract { file } => extract_from_file(&file, format),
    }
}

/// Reports whether a string is a placeholder reference.
fn check_placeholder(value: &str) -> crate::CliResult<()> {
    if is_placeholder_str(value) {
        success(&format!("{value} is a placeholder reference"));
    } else {
        info(&format!("{value} is not a placeholder reference"));
    }
    Ok(())
}

/// Extracts placeholder references from a JSON document's top-level members.
fn extract_from_file(file: &Path, format: OutputFormat) -> crate::CliResult<()> {
    let content = std::fs::read_to_string(file)?;
    let document: Value = serde_json::from_str(&content)?;

    let rows: Vec<PlaceholderRow> = match &document {
        Value::Object(members) => members
            .iter()
            .flat_map(|(key, member)| {
                extract_placeholders(member)
                    .into_iter()
                    .map(|placeholder| PlaceholderRow {
                        key: key.clone(),
                        placeholder,
                    })
            })
            .collect(),
        other => extract_placeholders(other)
            .into_iter()
            .map(|placeholder| PlaceholderRow {
                key: "(document)".to_string(),
                placeholder,
            })
            .collect(),
    };

    output::output(&rows, format)
}
