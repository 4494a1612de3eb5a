#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::storage::DEFAULT_RESOURCE;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{CdmError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate};
use self::toml_config::TomlConfig;

/// Effective settings: command line flags layered over the TOML file.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub input: String,
    pub output_path: Option<String>,
    pub correlation_id: Option<String>,
    pub resources_dir: Option<String>,
    pub pretty: bool,
    pub verbose: bool,
    pub log_level: Option<String>,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_toml(TomlConfig::default())
    }
}

impl AppConfig {
    pub fn from_toml(config: TomlConfig) -> Self {
        Self {
            input: config
                .input
                .default_resource
                .unwrap_or_else(|| DEFAULT_RESOURCE.to_string()),
            output_path: config.output.path,
            correlation_id: config.input.correlation_id,
            resources_dir: config.input.resources_dir,
            pretty: config.output.pretty.unwrap_or(true),
            verbose: false,
            log_level: config.logging.level,
            log_format: config
                .logging
                .format
                .as_deref()
                .and_then(LogFormat::parse)
                .unwrap_or_default(),
        }
    }

    #[cfg(feature = "cli")]
    pub fn from_cli(cli: cli::CliConfig) -> Result<Self> {
        let toml = match &cli.config {
            Some(path) => {
                let toml = TomlConfig::from_file(path)?;
                toml.validate()?;
                toml
            }
            None => TomlConfig::default(),
        };

        let mut config = Self::from_toml(toml);
        if let Some(input) = cli.input {
            config.input = input;
        }
        if cli.output.is_some() {
            config.output_path = cli.output;
        }
        if cli.correlation_id.is_some() {
            config.correlation_id = cli.correlation_id;
        }
        if cli.resources_dir.is_some() {
            config.resources_dir = cli.resources_dir;
        }
        if cli.compact {
            config.pretty = false;
        }
        if cli.json_logs {
            config.log_format = LogFormat::Json;
        }
        config.verbose = cli.verbose;

        Ok(config)
    }
}

impl ConfigProvider for AppConfig {
    fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    fn resources_dir(&self) -> Option<&str> {
        self.resources_dir.as_deref()
    }

    fn pretty_output(&self) -> bool {
        self.pretty
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        if self.input.trim().is_empty() {
            return Err(CdmError::InvalidInput {
                message: "Input path or resource name cannot be empty".to_string(),
            });
        }
        if let Some(path) = &self.output_path {
            validation::validate_path("output", path)?;
        }
        if let Some(dir) = &self.resources_dir {
            validation::validate_path("resources_dir", dir)?;
        }
        if let Some(id) = &self.correlation_id {
            validation::validate_correlation_id("correlation_id", id)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.input, DEFAULT_RESOURCE);
        assert!(config.pretty_output());
        assert_eq!(config.log_format, LogFormat::Compact);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml() {
        let toml = TomlConfig::from_toml_str(
            r#"
[input]
default_resource = "swap.json"
correlation_id = "batch-7"

[output]
pretty = false

[logging]
format = "json"
"#,
        )
        .unwrap();

        let config = AppConfig::from_toml(toml);
        assert_eq!(config.input, "swap.json");
        assert_eq!(config.correlation_id(), Some("batch-7"));
        assert!(!config.pretty_output());
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_correlation_id_rejected() {
        let config = AppConfig {
            correlation_id: Some("two words".to_string()),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_overrides_toml() {
        use clap::Parser;
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            b"[input]\ndefault_resource = \"from-toml.json\"\ncorrelation_id = \"toml-id\"\n",
        )
        .unwrap();
        let config_path = file.path().to_str().unwrap().to_string();

        let cli = cli::CliConfig::parse_from([
            "golden-cdm",
            "--config",
            config_path.as_str(),
            "--correlation-id",
            "cli-id",
            "--compact",
        ]);
        let config = AppConfig::from_cli(cli).unwrap();

        assert_eq!(config.input, "from-toml.json");
        assert_eq!(config.correlation_id(), Some("cli-id"));
        assert!(!config.pretty);

        let cli = cli::CliConfig::parse_from(["golden-cdm", "trade.json", "--json-logs"]);
        let config = AppConfig::from_cli(cli).unwrap();
        assert_eq!(config.input, "trade.json");
        assert_eq!(config.log_format, LogFormat::Json);
    }
}
