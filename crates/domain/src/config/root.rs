use serde::{Deserialize, Serialize};

use super::decoder::{DecoderConfig, MAX_POINTER_HOPS_LIMIT};
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::output::{InputEncoding, OutputConfig, OutputFormat};

const LOCAL_CONFIG_PATH: &str = "dnswire.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/dnswire/config.toml";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main configuration structure for dnswire
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Wire decoder limits
    #[serde(default)]
    pub decoder: DecoderConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Input and output handling
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dnswire.toml in current directory
    /// 3. /etc/dnswire/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(hops) = overrides.max_pointer_hops {
            self.decoder.max_pointer_hops = hops;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(format) = overrides.format {
            self.output.format = format;
        }
        if let Some(encoding) = overrides.input_encoding {
            self.output.input_encoding = encoding;
        }
        if overrides.tcp_framed {
            self.output.tcp_framed = true;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let hops = self.decoder.max_pointer_hops;
        if hops == 0 || hops > MAX_POINTER_HOPS_LIMIT {
            return Err(ConfigError::Validation(format!(
                "max_pointer_hops must be between 1 and {}, got {}",
                MAX_POINTER_HOPS_LIMIT, hops
            )));
        }

        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "Unknown log level '{}'. Expected one of: {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| std::path::Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub max_pointer_hops: Option<u8>,
    pub log_level: Option<String>,
    pub format: Option<OutputFormat>,
    pub input_encoding: Option<InputEncoding>,
    pub tcp_framed: bool,
}
