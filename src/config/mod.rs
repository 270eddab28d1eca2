//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `DS2` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use ds2_profile::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Bank at {}", config.questionnaire.bank_path.display());
//! ```

mod error;
mod questionnaire;
mod server;

pub use error::{ConfigError, ValidationError};
pub use questionnaire::QuestionnaireConfig;
pub use server::{LogFormat, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// development configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Listener, logging, timeout and CORS settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Question bank location, sampling seed and session TTL
    #[serde(default)]
    pub questionnaire: QuestionnaireConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DS2` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `DS2__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `DS2__QUESTIONNAIRE__BANK_PATH=...` -> `questionnaire.bank_path = ...`
    /// - `DS2__QUESTIONNAIRE__SEED=42` -> `questionnaire.seed = 42`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DS2")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.questionnaire.validate()?;
        Ok(())
    }

    /// Whether log events are rendered as JSON
    pub fn json_logs(&self) -> bool {
        self.server.log_format == LogFormat::Json
    }
}
