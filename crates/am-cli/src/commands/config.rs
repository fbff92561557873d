//! Configuration management commands.

use crate::cli::ConfigCommand;
use crate::config::OutputFormat;
use crate::output::{info, success};
use crate::CliConfig;

/// Runs a config command.
pub fn run_config(cmd: ConfigCommand, config: &mut CliConfig) -> crate::CliResult<()> {
    match cmd {
        ConfigCommand::Show => show_config(config),
        ConfigCommand::Set { key, value } => set_config(config, &key, &value),
        ConfigCommand::Init => init_config(config),
    }
}

/// Shows the current configuration.
fn show_config(config: &CliConfig) -> crate::CliResult<()> {
    let config_path = CliConfig::config_path()?;

    info(&format!("Configuration file: {}", config_path.display()));
    println!();
    println!("output_format: {:?}", config.output_format);

    Ok(())
}

/// Sets a configuration value.
fn set_config(config: &mut CliConfig, key: &str, value: &str) -> crate::CliResult<()> {
    match key {
        "output_format" | "output" => {
            config.output_format = parse_output_format(value)?;
        }
        _ => {
            return Err(crate::CliError::InvalidArgument(format!(
                "Unknown configuration key: {}. Known keys: output_format",
                key
            )));
        }
    }

    config.save()?;
    success(&format!("Set {} = {}", key, value));
    Ok(())
}

/// Initializes configuration interactively.
fn init_config(config: &mut CliConfig) -> crate::CliResult<()> {
    let config_path = CliConfig::config_path()?;

    info("Initializing amc configuration...");
    println!();

    print!(
        "Output format (table/json/yaml/quiet) [{:?}]: ",
        config.output_format
    );
    std::io::Write::flush(&mut std::io::stdout())?;
    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    {
        let trimmed = input.trim();
        if !trimmed.is_empty() {
            config.output_format = parse_output_format(trimmed).unwrap_or(config.output_format);
        }
    }

    config.save()?;

    println!();
    success(&format!("Configuration saved to: {}", config_path.display()));
    Ok(())
}

/// Parses an output-format name.
fn parse_output_format(value: &str) -> crate::CliResult<OutputFormat> {
    match value.to_lowercase().as_str() {
        "table" => Ok(OutputFormat::Table),
        "json" => Ok(OutputFormat::Json),
        "yaml" => Ok(OutputFormat::Yaml),
        "quiet" => Ok(OutputFormat::Quiet),
        _ => Err(crate::CliError::InvalidArgument(format!(
            "Unknown output format: {}. Supported: table, json, yaml, quiet",
            value
        ))),
    }
}
