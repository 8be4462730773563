//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `RISK_ASSESSMENT` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use cyber_risk_assessment::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod assessment;
mod error;
mod server;
mod storage;

pub use assessment::AssessmentConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// in-memory server. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// Response store selection
    #[serde(default)]
    pub storage: StorageConfig,

    /// Question catalog override
    #[serde(default)]
    pub assessment: AssessmentConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `RISK_ASSESSMENT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `RISK_ASSESSMENT__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `RISK_ASSESSMENT__STORAGE__BACKEND=file` -> `storage.backend = "file"`
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
                    .prefix("RISK_ASSESSMENT")
                    .prefix_separator("__")
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
        self.storage.validate()?;
        self.assessment.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
