//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod assessment;

pub use assessment::{
    AssessmentError, CaptureLeadCommand, CaptureLeadHandler, CaptureLeadResult,
    DeleteAssessmentCommand, DeleteAssessmentHandler, GetResultsHandler, GetResultsQuery,
    GetResultsResult, GetVisibleQuestionsHandler, GetVisibleQuestionsQuery,
    GetVisibleQuestionsResult, StartAssessmentCommand, StartAssessmentHandler,
    StartAssessmentResult, SubmitResponseCommand, SubmitResponseHandler, SubmitResponseResult,
};
