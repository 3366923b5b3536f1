//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Every section is optional; a missing file section takes its defaults.
//!
//! # Example
//!
//! ```no_run
//! use traderiser::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::catalog::CatalogConfig;
use super::logging::LoggingConfig;
use super::selection::SelectionConfig;
use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Selection policy and solver budget.
    #[serde(default)]
    pub selection: SelectionConfig,

    /// Instrument catalog location.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first bad field.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        let selection = &self.selection;

        if selection.max_trades == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_trades",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        if selection.max_sectors == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_sectors",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        if selection.max_volatility < Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "max_volatility",
                reason: "must be 0 or greater".to_string(),
            }
            .into());
        }

        if selection.solve_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "solve_timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        if selection.candidate_limit < selection.max_trades {
            return Err(ConfigError::InvalidValue {
                field: "candidate_limit",
                reason: "must be >= max_trades".to_string(),
            }
            .into());
        }

        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("expected 'pretty' or 'json', got '{}'", self.logging.format),
            }
            .into());
        }

        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
