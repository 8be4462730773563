//! HTTP adapter for assessment endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AssessmentStartedResponse, CaptureLeadRequest, ErrorResponse, LeadCapturedResponse,
    QuestionCatalogResponse, ResponseRecordedResponse, ResultsResponse, StartAssessmentRequest,
    VisibleQuestionsResponse,
};
pub use handlers::{AssessmentApiError, AssessmentAppState};
pub use routes::assessment_router;
