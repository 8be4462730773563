//! Listener, logging and CORS settings for the assessment API

use serde::Deserialize;
use std::net::SocketAddr;

use super::error::ValidationError;

/// How the assessment API is exposed
///
/// Every field has a default, so `RISK_ASSESSMENT__SERVER__*` variables only
/// need to name what differs from a local development run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface the API binds to; must be an IP literal
    pub host: String,

    pub port: u16,

    /// Production switches logging to JSON and warns about volatile storage
    pub environment: Environment,

    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub log_level: String,

    /// Comma-separated origins the questionnaire frontend is served from.
    /// Empty allows any origin.
    pub cors_origins: String,
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl ServerConfig {
    /// Address the listener binds to
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidSocketAddress` when `host` is not an IP literal.
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse()
            .map_err(|_| ValidationError::InvalidSocketAddress(raw))
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Configured frontend origins, blanks skipped
    pub fn allowed_origins(&self) -> impl Iterator<Item = &str> {
        self.cors_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        self.socket_addr().map(|_| ())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            environment: Environment::Development,
            log_level: "info,cyber_risk_assessment=debug,tower_http=info".to_string(),
            cors_origins: String::new(),
        }
    }
}
