use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;

use crate::utils::errors::Operation;

/// Environment variable naming the server's TOML configuration file.
pub const CONFIG_ENV_VAR: &str = "DASHBOARD_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{operation} delay of {delay_ms}ms does not fit in the {timeout_ms}ms fetch timeout")]
    DelayExceedsTimeout {
        operation: Operation,
        delay_ms: u64,
        timeout_ms: u64,
    },
}

/// Simulated latency and the upper bound applied to every fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub validator_delay_ms: u64,
    pub network_delay_ms: u64,
    pub snapshot_delay_ms: u64,
    pub timeout_ms: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            validator_delay_ms: 1000,
            network_delay_ms: 800,
            snapshot_delay_ms: 600,
            timeout_ms: 5000,
        }
    }
}

impl FetchConfig {
    /// No simulated latency, default timeout.
    pub fn instant() -> Self {
        Self {
            validator_delay_ms: 0,
            network_delay_ms: 0,
            snapshot_delay_ms: 0,
            ..Self::default()
        }
    }

    pub fn delay(&self, operation: Operation) -> Duration {
        Duration::from_millis(match operation {
            Operation::ValidatorData => self.validator_delay_ms,
            Operation::NetworkData => self.network_delay_ms,
            Operation::SnapshotData => self.snapshot_delay_ms,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// The timeout covers the simulated delay, so every delay must be
    /// strictly shorter than it or that accessor can only ever time out.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for operation in Operation::ALL {
            let delay_ms = self.delay(operation).as_millis() as u64;
            if delay_ms >= self.timeout_ms {
                return Err(ConfigError::DelayExceedsTimeout {
                    operation,
                    delay_ms,
                    timeout_ms: self.timeout_ms,
                });
            }
        }
        Ok(())
    }
}

/// Configuration for the HTTP service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,
    pub fetch: FetchConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
            fetch: FetchConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&raw)?;
        config.fetch.validate()?;
        Ok(config)
    }

    /// Reads the file named by `DASHBOARD_CONFIG`, or falls back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load_from(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: ServerConfig = toml::from_str(
            r#"
            [fetch]
            timeout_ms = 250
            "#,
        )
        .unwrap();

        assert_eq!(config.bind_address, "127.0.0.1:8080");
        assert_eq!(config.fetch.timeout(), Duration::from_millis(250));
        assert_eq!(
            config.fetch.delay(Operation::ValidatorData),
            Duration::from_millis(1000)
        );
        assert_eq!(
            config.fetch.delay(Operation::NetworkData),
            Duration::from_millis(800)
        );
        assert_eq!(
            config.fetch.delay(Operation::SnapshotData),
            Duration::from_millis(600)
        );
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = toml::from_str::<ServerConfig>("bind_address = 8080").unwrap_err();
        assert!(ConfigError::from(err).to_string().starts_with("invalid configuration"));
    }

    #[test]
    fn default_delays_fit_in_the_timeout() {
        FetchConfig::default().validate().unwrap();
        FetchConfig::instant().validate().unwrap();
    }

    #[test]
    fn rejects_delay_at_or_above_timeout() {
        let config = FetchConfig {
            snapshot_delay_ms: 6000,
            ..FetchConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::DelayExceedsTimeout {
                operation: Operation::SnapshotData,
                delay_ms: 6000,
                timeout_ms: 5000,
            }
        ));
        assert_eq!(
            err.to_string(),
            "snapshot data delay of 6000ms does not fit in the 5000ms fetch timeout"
        );

        let config = FetchConfig {
            validator_delay_ms: 5000,
            ..FetchConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_from_rejects_delay_longer_than_timeout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.toml");
        fs::write(&path, "[fetch]\nnetwork_delay_ms = 800\ntimeout_ms = 500\n").unwrap();

        let result = ServerConfig::load_from(&path);

        assert!(matches!(
            result,
            Err(ConfigError::DelayExceedsTimeout {
                operation: Operation::NetworkData,
                ..
            })
        ));
    }

    #[test]
    fn reports_missing_file() {
        let err = ServerConfig::load_from(Path::new("/nonexistent/dashboard.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
