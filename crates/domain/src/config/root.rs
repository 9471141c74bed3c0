use serde::{Deserialize, Serialize};

use super::blocking::BlockingConfig;
use super::database::DatabaseConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;

/// Main configuration structure for Focusgate
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Web command surface (port, bind address)
    pub server: ServerConfig,

    /// Blocking behavior (grant defaults, warning lead, aliases)
    pub blocking: BlockingConfig,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Database configuration
    pub database: DatabaseConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. focusgate.toml in current directory
    /// 3. /etc/focusgate/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("focusgate.toml").exists() {
            Self::from_file("focusgate.toml")?
        } else if std::path::Path::new("/etc/focusgate/config.toml").exists() {
            Self::from_file("/etc/focusgate/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(db) = overrides.database_path {
            self.database.path = db;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.web_port == 0 {
            return Err(ConfigError::Validation("Web port cannot be 0".to_string()));
        }
        if self.blocking.default_grant_minutes == 0 {
            return Err(ConfigError::Validation(
                "Default grant duration must be at least one minute".to_string(),
            ));
        }
        if self.blocking.warning_lead_seconds == 0 {
            return Err(ConfigError::Validation(
                "Warning lead must be at least one second".to_string(),
            ));
        }
        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub database_path: Option<String>,
    pub log_level: Option<String>,
}
