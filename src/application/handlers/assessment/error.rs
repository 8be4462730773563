//! Errors surfaced by the assessment handlers.

use crate::domain::foundation::{AssessmentId, ErrorCode, ValidationError};
use crate::ports::ResponseStoreError;

#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error("Assessment not found: {0}")]
    NotFound(AssessmentId),

    #[error("Assessment {0} has no responses yet")]
    NoResponses(AssessmentId),

    #[error("Unknown question: {0}")]
    UnknownQuestion(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl AssessmentError {
    /// Machine-readable code for API consumers.
    pub fn code(&self) -> ErrorCode {
        match self {
            AssessmentError::NotFound(_) => ErrorCode::AssessmentNotFound,
            AssessmentError::NoResponses(_) => ErrorCode::NoResponses,
            AssessmentError::UnknownQuestion(_) => ErrorCode::UnknownQuestion,
            AssessmentError::InvalidResponse(_) => ErrorCode::ValidationFailed,
            AssessmentError::Storage(_) => ErrorCode::StorageError,
        }
    }
}

impl From<ResponseStoreError> for AssessmentError {
    fn from(err: ResponseStoreError) -> Self {
        match err {
            ResponseStoreError::NotFound(id) => AssessmentError::NotFound(id),
            other => AssessmentError::Storage(other.to_string()),
        }
    }
}
