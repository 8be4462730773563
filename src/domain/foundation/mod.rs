//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the assessment domain.

mod errors;
mod ids;
mod percentage;
mod timestamp;

pub use errors::{ErrorCode, ValidationError};
pub use ids::AssessmentId;
pub use percentage::Percentage;
pub use timestamp::Timestamp;
