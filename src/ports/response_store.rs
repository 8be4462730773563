//! Response Store Port - Interface for persisting assessment state.
//!
//! This port defines how an assessment's responses and lead details are
//! saved and loaded, supporting both in-memory and file-based storage.

use async_trait::async_trait;

use crate::domain::assessment::{LeadDetails, Response, ResponseSet};
use crate::domain::foundation::AssessmentId;

/// Errors that can occur during response store operations
#[derive(Debug, thiserror::Error)]
pub enum ResponseStoreError {
    #[error("Assessment not found: {0}")]
    NotFound(AssessmentId),

    #[error("Failed to serialize assessment data: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize assessment data: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for persisting and loading assessment state
#[async_trait]
pub trait ResponseStore: Send + Sync {
    /// Save the full response set, replacing whatever was stored
    ///
    /// # Errors
    /// Returns `ResponseStoreError` if save fails
    async fn save_responses(
        &self,
        id: AssessmentId,
        responses: &ResponseSet,
    ) -> Result<(), ResponseStoreError>;

    /// Load the response set
    ///
    /// # Errors
    /// Returns `ResponseStoreError::NotFound` if the assessment was never started
    async fn load_responses(&self, id: AssessmentId) -> Result<ResponseSet, ResponseStoreError>;

    /// Upsert one response into the stored set and return the updated set
    ///
    /// Load, upsert and save happen as one step per assessment, so concurrent
    /// submissions to the same assessment never overwrite each other.
    ///
    /// # Errors
    /// Returns `ResponseStoreError::NotFound` if the assessment was never started
    async fn upsert_response(
        &self,
        id: AssessmentId,
        response: Response,
    ) -> Result<ResponseSet, ResponseStoreError>;

    /// Save lead-capture details
    async fn save_lead(&self, id: AssessmentId, lead: &LeadDetails) -> Result<(), ResponseStoreError>;

    /// Load lead-capture details, `None` if not captured yet
    async fn load_lead(&self, id: AssessmentId) -> Result<Option<LeadDetails>, ResponseStoreError>;

    /// Check if an assessment exists
    async fn exists(&self, id: AssessmentId) -> Result<bool, ResponseStoreError>;

    /// Delete everything stored for an assessment. Deleting a missing one is not an error.
    async fn delete(&self, id: AssessmentId) -> Result<(), ResponseStoreError>;
}
