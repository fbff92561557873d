//! # am-cli
//!
//! Admin inspection tool for access-management configuration values.
//!
//! This crate provides the `amc` command-line utility for:
//! - Inspecting the layered view of configuration-value documents
//! - Listing empty-value keys before form submission
//! - Stripping null password values against a schema
//! - Checking and extracting deployment-time placeholders
//!
//! All commands operate on local JSON files; the tool performs no network
//! calls.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::Cli;
pub use config::CliConfig;
pub use error::{CliError, CliResult};
