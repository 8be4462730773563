//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (write) are kept separate from query handlers (read).

pub mod handlers;

pub use handlers::{
    AssessmentError, CaptureLeadCommand, CaptureLeadHandler, CaptureLeadResult,
    DeleteAssessmentCommand, DeleteAssessmentHandler, GetResultsHandler, GetResultsQuery,
    GetResultsResult, GetVisibleQuestionsHandler, GetVisibleQuestionsQuery,
    GetVisibleQuestionsResult, StartAssessmentCommand, StartAssessmentHandler,
    StartAssessmentResult, SubmitResponseCommand, SubmitResponseHandler, SubmitResponseResult,
};
