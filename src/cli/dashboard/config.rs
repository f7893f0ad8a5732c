use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::warn;
use validator_dashboard::{config::ConfigError as FetchConfigError, FetchConfig};

use crate::types::OutputFormat;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to encode config: {0}")]
    Encode(#[from] toml::ser::Error),

    #[error("invalid fetch settings: {0}")]
    Fetch(#[from] FetchConfigError),
}

/// Configuration for the dashboard CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output format used when `--format` is not given
    pub default_format: OutputFormat,
    /// Retries after a failed fetch before giving up
    pub retries: u32,
    /// Simulated latency and timeout
    pub fetch: FetchConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Table,
            retries: 1,
            fetch: FetchConfig::default(),
        }
    }
}

impl Config {
    /// `None` when the platform has no user configuration directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("validator-dashboard").join("config.toml"))
    }

    /// Load configuration from the default location, writing the defaults
    /// there first if no file exists yet.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_or_default(Self::default_path().as_deref())
    }

    /// Without a path the defaults are used and nothing is written.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                warn!("No configuration directory found, using default settings");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
            return Ok(default_config);
        }

        let config_str = fs::read_to_string(path)?;
        let config = toml::from_str::<Config>(&config_str)?;
        config.fetch.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}
