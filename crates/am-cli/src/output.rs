//! Output formatting utilities.

use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use crate::config::OutputFormat;

/// Prints a success message.
pub fn success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Prints an error message.
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Prints a warning message.
pub fn warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), message);
}

/// Prints an info message.
pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Outputs rows in the specified format.
pub fn output<T: Tabled + serde::Serialize>(
    rows: &[T],
    format: OutputFormat,
) -> crate::CliResult<()> {
    match format {
        OutputFormat::Table => {
            if rows.is_empty() {
                info("No results found.");
            } else {
                let table = Table::new(rows).with(Style::rounded()).to_string();
                println!("{table}");
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(rows)?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            for row in rows {
                let json = serde_json::to_value(row)?;
                print_yaml_value(&json, 0);
                println!();
            }
        }
        OutputFormat::Quiet => {}
    }
    Ok(())
}

/// Outputs a single document.
pub fn output_single<T: serde::Serialize>(item: &T, format: OutputFormat) -> crate::CliResult<()> {
    match format {
        OutputFormat::Table | OutputFormat::Yaml => {
            let json = serde_json::to_value(item)?;
            print_yaml_value(&json, 0);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(item)?;
            println!("{json}");
        }
        OutputFormat::Quiet => {}
    }
    Ok(())
}

/// Prints a JSON value as YAML-like output.
fn print_yaml_value(value: &serde_json::Value, indent: usize) {
    let prefix = "  ".repeat(indent);

    match value {
        serde_json::Value::Array(items) => {
            for item in items {
                print!("{prefix}- ");
                print_yaml_value(item, indent + 1);
            }
        }
        serde_json::Value::Object(members) => {
            for (key, member) in members {
                if member.is_object() || member.is_array() {
                    println!("{prefix}{key}:");
                    print_yaml_value(member, indent + 1);
                } else {
                    print!("{prefix}{key}: ");
                    print_yaml_scalar(member);
                }
            }
        }
        scalar => {
            print!("{prefix}");
            print_yaml_scalar(scalar);
        }
    }
}

/// Prints a scalar JSON value on its own line.
fn print_yaml_scalar(value: &serde_json::Value) {
    match value {
        serde_json::Value::Null => println!("null"),
        serde_json::Value::Bool(b) => println!("{b}"),
        serde_json::Value::Number(n) => println!("{n}"),
        serde_json::Value::String(s) => println!("{s}"),
        _ => println!(),
    }
}
