//! # amc
//!
//! Admin inspection tool for access-management configuration values.

#![forbid(unsafe_code)]
#![deny(warnings)]

use am_cli::{
    cli::{Cli, Command},
    commands::{run_config, run_placeholder, run_values},
    config::CliConfig,
    output::error,
};
use clap::Parser;

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("am_values=debug,am_cli=debug")
            .try_init();
    }

    // Load configuration
    let mut config = match CliConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error(&format!("Failed to load configuration: {}", e));
            std::process::exit(1);
        }
    };

    let format = cli.output.unwrap_or(config.output_format);

    // Execute command
    let result = match cli.command {
        Command::Values(cmd) => run_values(cmd, format),
        Command::Placeholder(cmd) => run_placeholder(cmd, format),
        Command::Config(cmd) => run_config(cmd, &mut config),
    };

    if let Err(e) = result {
        error(&e.to_string());
        std::process::exit(1);
    }
}
