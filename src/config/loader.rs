use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "MODELER_LAUNCH_CONFIG";

/// Why the launch configuration could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid TOML: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid flag '{flag}': expected --name or --name=value")]
    InvalidFlag { flag: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// `MODELER_LAUNCH_CONFIG` wins if set. Otherwise uses
    /// `~/.config/modeler-launch/config.toml` on Unix/macOS, or the equivalent
    /// via `dirs::config_dir()`. Falls back to the current directory if
    /// config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return PathBuf::from(path);
        }
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("modeler-launch").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Every configured flag must carry a flag marker and a name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for flag in &self.flags {
            let name = flag.trim_start_matches('-');
            if !flag.starts_with('-') || name.is_empty() {
                return Err(ConfigError::InvalidFlag { flag: flag.clone() });
            }
        }
        Ok(())
    }
}
