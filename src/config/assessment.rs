//! Assessment engine configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Assessment configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssessmentConfig {
    /// YAML catalog to serve instead of the built-in question set
    pub catalog_path: Option<PathBuf>,
}

impl AssessmentConfig {
    /// Validate assessment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let Some(path) = &self.catalog_path else {
            return Ok(());
        };
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
        if !is_yaml {
            return Err(ValidationError::InvalidCatalogPath(path.display().to_string()));
        }
        Ok(())
    }
}
