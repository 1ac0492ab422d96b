//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct. Configuration is optional: every
//! field has a default, and a TOML file only needs the keys it changes.
//!
//! # Example
//!
//! ```
//! use roster::infrastructure::config::settings::Config;
//!
//! let config = Config::parse_toml("database = \"team.db\"").unwrap();
//! assert_eq!(config.database, "team.db");
//! assert_eq!(config.logging.level, "warn");
//! ```

use serde::Deserialize;
use std::path::Path;

use super::logging::{LoggingConfig, LOG_FORMATS};
use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Path to the SQLite database file.
    ///
    /// Defaults to "roster.db" in the current directory.
    #[serde(default = "default_database_path")]
    pub database: String,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_database_path() -> String {
    "roster.db".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database_path(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation
    /// fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the content is
    /// malformed, or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Replace the database path when an override is given.
    #[must_use]
    pub fn with_database(mut self, database: Option<String>) -> Self {
        if let Some(database) = database {
            self.database = database;
        }
        self
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty database path or an unknown log
    /// format.
    pub fn validate(&self) -> Result<()> {
        if self.database.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "database" }.into());
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!(
                    "expected one of {}, got '{}'",
                    LOG_FORMATS.join(", "),
                    self.logging.format
                ),
            }
            .into());
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "logging.level",
            }
            .into());
        }
        Ok(())
    }
}
