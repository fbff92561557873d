//! CLI configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// CLI configuration, persisted as TOML under the home directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Output format.
    #[serde(default)]
    pub output_format: OutputFormat,
}

impl CliConfig {
    /// Loads configuration from file, falling back to defaults when the
    /// file does not exist.
    pub fn load() -> crate::CliResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Self = toml::from_str(&content)
                .map_err(|e| crate::CliError::Config(format!("failed to parse config: {e}")))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves configuration to file.
    pub fn save(&self) -> crate::CliResult<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::CliError::Config(format!("failed to serialize config: {e}")))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    /// Gets the configuration file path.
    pub fn config_path() -> crate::CliResult<PathBuf> {
        let home = dirs_next::home_dir().ok_or_else(|| {
            crate::CliError::Config("could not determine home directory".to_string())
        })?;
        Ok(home.join(".amconsole").join("amc.toml"))
    }
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
    /// YAML format.
    Yaml,
    /// Quiet (minimal output).
    Quiet,
}
