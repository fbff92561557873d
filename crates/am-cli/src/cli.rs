//! CLI argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::OutputFormat;

/// amc - Inspection tool for access-management configuration values.
#[derive(Debug, Parser)]
#[command(name = "amc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (overrides config).
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configuration-value inspection commands.
    #[command(subcommand)]
    Values(ValuesCommand),

    /// Placeholder utilities.
    #[command(subcommand)]
    Placeholder(PlaceholderCommand),

    /// Configuration management.
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Configuration-value commands.
#[derive(Debug, Subcommand)]
pub enum ValuesCommand {
    /// Show the layered view of a configuration-value document.
    Show {
        /// Path to the values JSON file.
        file: PathBuf,
    },

    /// List keys whose value is empty.
    EmptyKeys {
        /// Path to the values JSON file.
        file: PathBuf,
    },

    /// Remove null password values, guided by a schema.
    StripPasswords {
        /// Path to the values JSON file.
        file: PathBuf,

        /// Path to the schema JSON file.
        #[arg(long)]
        schema: PathBuf,
    },

    /// Invert the layered view back to the service document shape.
    Export {
        /// Path to the values JSON file.
        file: PathBuf,
    },
}

/// Placeholder commands.
#[derive(Debug, Subcommand)]
pub enum PlaceholderCommand {
    /// Check whether a string is a placeholder reference.
    Check {
        /// The string to check.
        value: String,
    },

    /// Extract placeholder references from a JSON document.
    Extract {
        /// Path to the JSON file.
        file: PathBuf,
    },
}

/// Config commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,

    /// Set a configuration value.
    Set {
        /// Configuration key.
        key: String,
        /// Configuration value.
        value: String,
    },

    /// Initialize configuration interactively.
    Init,
}
