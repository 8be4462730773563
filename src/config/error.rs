//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid socket address: {0}")]
    InvalidSocketAddress(String),

    #[error("Unknown storage backend: {0} (expected 'memory' or 'file')")]
    UnknownStorageBackend(String),

    #[error("Catalog override must be a .yaml or .yml file: {0}")]
    InvalidCatalogPath(String),
}
