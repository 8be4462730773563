//! HTTP handlers for assessment endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::error;

use crate::application::handlers::assessment::{
    AssessmentError, CaptureLeadCommand, CaptureLeadHandler, DeleteAssessmentCommand,
    DeleteAssessmentHandler, GetResultsHandler, GetResultsQuery, GetVisibleQuestionsHandler,
    GetVisibleQuestionsQuery, StartAssessmentCommand, StartAssessmentHandler,
    SubmitResponseCommand, SubmitResponseHandler,
};
use crate::domain::assessment::Response;
use crate::domain::catalog::Catalog;
use crate::domain::foundation::{AssessmentId, ErrorCode};
use crate::ports::ResponseStore;

use super::dto::{
    AssessmentStartedResponse, CaptureLeadRequest, ErrorResponse, LeadCapturedResponse,
    QuestionCatalogResponse, ResponseRecordedResponse, ResultsResponse, StartAssessmentRequest,
    VisibleQuestionsResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct AssessmentAppState {
    pub catalog: Arc<Catalog>,
    pub store: Arc<dyn ResponseStore>,
}

impl AssessmentAppState {
    pub fn new(catalog: Arc<Catalog>, store: Arc<dyn ResponseStore>) -> Self {
        Self { catalog, store }
    }

    pub fn start_assessment_handler(&self) -> StartAssessmentHandler {
        StartAssessmentHandler::new(self.catalog.clone(), self.store.clone())
    }

    pub fn submit_response_handler(&self) -> SubmitResponseHandler {
        SubmitResponseHandler::new(self.catalog.clone(), self.store.clone())
    }

    pub fn capture_lead_handler(&self) -> CaptureLeadHandler {
        CaptureLeadHandler::new(self.store.clone())
    }

    pub fn visible_questions_handler(&self) -> GetVisibleQuestionsHandler {
        GetVisibleQuestionsHandler::new(self.catalog.clone(), self.store.clone())
    }

    pub fn results_handler(&self) -> GetResultsHandler {
        GetResultsHandler::new(self.catalog.clone(), self.store.clone())
    }

    pub fn delete_assessment_handler(&self) -> DeleteAssessmentHandler {
        DeleteAssessmentHandler::new(self.store.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// HTTP Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/questions - The full question catalog
pub async fn list_questions(State(state): State<AssessmentAppState>) -> impl IntoResponse {
    Json(QuestionCatalogResponse {
        questions: state.catalog.questions().to_vec(),
    })
}

/// POST /api/assessments - Start (or restart) an assessment
pub async fn start_assessment(
    State(state): State<AssessmentAppState>,
    request: Option<Json<StartAssessmentRequest>>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let previous = request
        .and_then(|Json(req)| req.previous_assessment_id)
        .map(|id| parse_assessment_id(&id))
        .transpose()?;

    let result = state
        .start_assessment_handler()
        .handle(StartAssessmentCommand { previous })
        .await?;

    let response = AssessmentStartedResponse {
        assessment_id: result.assessment_id.to_string(),
        questions: result.visible_questions,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/assessments/:id/questions - Questions visible for the stored answers
pub async fn get_visible_questions(
    State(state): State<AssessmentAppState>,
    Path(assessment_id): Path<String>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let assessment_id = parse_assessment_id(&assessment_id)?;

    let result = state
        .visible_questions_handler()
        .handle(GetVisibleQuestionsQuery { assessment_id })
        .await?;

    let response = VisibleQuestionsResponse {
        total: result.questions.len(),
        answered: result.answered,
        questions: result.questions,
    };

    Ok(Json(response))
}

/// PUT /api/assessments/:id/responses - Record or overwrite one answer
pub async fn submit_response(
    State(state): State<AssessmentAppState>,
    Path(assessment_id): Path<String>,
    Json(response): Json<Response>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let assessment_id = parse_assessment_id(&assessment_id)?;

    let result = state
        .submit_response_handler()
        .handle(SubmitResponseCommand {
            assessment_id,
            response,
        })
        .await?;

    Ok(Json(ResponseRecordedResponse {
        live_score: result.live_score,
        visible_questions: result.visible_questions,
        compliance_complexity_warning: result.compliance_complexity_warning,
    }))
}

/// POST /api/assessments/:id/lead - Capture contact details; an empty body skips
pub async fn capture_lead(
    State(state): State<AssessmentAppState>,
    Path(assessment_id): Path<String>,
    request: Option<Json<CaptureLeadRequest>>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let assessment_id = parse_assessment_id(&assessment_id)?;

    let result = state
        .capture_lead_handler()
        .handle(CaptureLeadCommand {
            assessment_id,
            lead: request.map(|Json(req)| req.into()),
        })
        .await?;

    let response = LeadCapturedResponse {
        assessment_id: assessment_id.to_string(),
        anonymous: result.lead.is_anonymous(),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/assessments/:id/results - The full report
pub async fn get_results(
    State(state): State<AssessmentAppState>,
    Path(assessment_id): Path<String>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let assessment_id = parse_assessment_id(&assessment_id)?;

    let result = state
        .results_handler()
        .handle(GetResultsQuery { assessment_id })
        .await?;

    Ok(Json(ResultsResponse {
        results: result.results,
        lead: result.lead,
    }))
}

/// DELETE /api/assessments/:id - Discard an assessment
pub async fn delete_assessment(
    State(state): State<AssessmentAppState>,
    Path(assessment_id): Path<String>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let assessment_id = parse_assessment_id(&assessment_id)?;

    state
        .delete_assessment_handler()
        .handle(DeleteAssessmentCommand { assessment_id })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

fn parse_assessment_id(raw: &str) -> Result<AssessmentId, AssessmentApiError> {
    raw.parse()
        .map_err(|_| AssessmentApiError::BadRequest(format!("Invalid assessment ID: {}", raw)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type for assessment endpoints.
#[derive(Debug)]
pub enum AssessmentApiError {
    BadRequest(String),
    Assessment(AssessmentError),
}

impl From<AssessmentError> for AssessmentApiError {
    fn from(err: AssessmentError) -> Self {
        AssessmentApiError::Assessment(err)
    }
}

impl IntoResponse for AssessmentApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            AssessmentApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            AssessmentApiError::Assessment(err) => {
                let status = match err.code() {
                    ErrorCode::AssessmentNotFound => StatusCode::NOT_FOUND,
                    ErrorCode::NoResponses => StatusCode::UNPROCESSABLE_ENTITY,
                    ErrorCode::UnknownQuestion | ErrorCode::ValidationFailed => {
                        StatusCode::BAD_REQUEST
                    }
                    ErrorCode::StorageError | ErrorCode::InternalError => {
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                };
                if status == StatusCode::INTERNAL_SERVER_ERROR {
                    error!(error = %err, "Assessment request failed");
                    (status, ErrorResponse::new(err.code(), "Storage is unavailable"))
                } else {
                    (status, ErrorResponse::new(err.code(), err.to_string()))
                }
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let response =
            AssessmentApiError::from(AssessmentError::NotFound(AssessmentId::new())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn no_responses_maps_to_422() {
        let response = AssessmentApiError::from(AssessmentError::NoResponses(AssessmentId::new()))
            .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn unknown_question_maps_to_400() {
        let response =
            AssessmentApiError::from(AssessmentError::UnknownQuestion("nope".into())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn storage_failure_maps_to_500() {
        let response =
            AssessmentApiError::from(AssessmentError::Storage("disk".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn malformed_id_is_a_bad_request() {
        let err = parse_assessment_id("not-a-uuid").unwrap_err();
        assert!(matches!(err, AssessmentApiError::BadRequest(msg) if msg.contains("not-a-uuid")));
    }
}
