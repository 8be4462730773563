//! Assessment command and query handlers.

mod capture_lead;
mod delete_assessment;
mod error;
mod get_results;
mod get_visible_questions;
mod start_assessment;
mod submit_response;

pub use capture_lead::{CaptureLeadCommand, CaptureLeadHandler, CaptureLeadResult};
pub use delete_assessment::{DeleteAssessmentCommand, DeleteAssessmentHandler};
pub use error::AssessmentError;
pub use get_results::{GetResultsHandler, GetResultsQuery, GetResultsResult};
pub use get_visible_questions::{
    GetVisibleQuestionsHandler, GetVisibleQuestionsQuery, GetVisibleQuestionsResult,
};
pub use start_assessment::{StartAssessmentCommand, StartAssessmentHandler, StartAssessmentResult};
pub use submit_response::{SubmitResponseCommand, SubmitResponseHandler, SubmitResponseResult};
