//! Response store configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Which `ResponseStore` adapter to run with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    #[default]
    Memory,
    File,
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// `memory` or `file`
    #[serde(default = "default_backend")]
    pub backend: String,

    /// Root directory for the file backend
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl StorageConfig {
    /// Parsed backend selection
    pub fn backend(&self) -> Result<StorageBackend, ValidationError> {
        match self.backend.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "file" => Ok(StorageBackend::File),
            other => Err(ValidationError::UnknownStorageBackend(other.to_string())),
        }
    }

    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.backend()? == StorageBackend::File && self.data_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.data_dir"));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            data_dir: default_data_dir(),
        }
    }
}

fn default_backend() -> String {
    "memory".to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data/assessments")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_memory() {
        let config = StorageConfig::default();
        assert_eq!(config.backend().unwrap(), StorageBackend::Memory);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn backend_is_case_insensitive() {
        let config = StorageConfig {
            backend: "FILE".to_string(),
            ..Default::default()
        };
        assert_eq!(config.backend().unwrap(), StorageBackend::File);
    }

    #[test]
    fn unknown_backend_is_rejected() {
        let config = StorageConfig {
            backend: "postgres".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::UnknownStorageBackend(b)) if b == "postgres"
        ));
    }

    #[test]
    fn file_backend_requires_data_dir() {
        let config = StorageConfig {
            backend: "file".to_string(),
            data_dir: PathBuf::new(),
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired("storage.data_dir"))
        ));
    }
}
