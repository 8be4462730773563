//! Data Transfer Objects for assessment HTTP endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing
//! independent evolution of the API contract.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::LeadDetails;
use crate::domain::catalog::Question;
use crate::domain::foundation::{ErrorCode, Timestamp};
use crate::domain::results::AssessmentResults;
use crate::domain::scoring::LiveScore;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to start an assessment, optionally replacing a previous one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartAssessmentRequest {
    #[serde(default)]
    pub previous_assessment_id: Option<String>,
}

/// Contact details submitted before results. The capture time is stamped server-side.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureLeadRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
    pub job_title: String,
    #[serde(default)]
    pub phone: Option<String>,
}

impl From<CaptureLeadRequest> for LeadDetails {
    fn from(req: CaptureLeadRequest) -> Self {
        LeadDetails {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            company: req.company,
            job_title: req.job_title,
            phone: req.phone,
            captured_at: Timestamp::now(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionCatalogResponse {
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentStartedResponse {
    pub assessment_id: String,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibleQuestionsResponse {
    pub questions: Vec<Question>,
    pub answered: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseRecordedResponse {
    pub live_score: LiveScore,
    pub visible_questions: Vec<Question>,
    pub compliance_complexity_warning: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadCapturedResponse {
    pub assessment_id: String,
    pub anonymous: bool,
}

/// Results body: the report fields at top level, plus the lead when captured.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsResponse {
    #[serde(flatten)]
    pub results: AssessmentResults,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead: Option<LeadDetails>,
}

/// Standard error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn start_request_accepts_empty_object() {
        let req: StartAssessmentRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.previous_assessment_id.is_none());
    }

    #[test]
    fn lead_request_deserializes_camel_case() {
        let req: CaptureLeadRequest = serde_json::from_value(json!({
            "firstName": "Ada",
            "lastName": "Byron",
            "email": "ada@example.org",
            "company": "Analytical Ltd",
            "jobTitle": "Head of IT"
        }))
        .unwrap();
        let lead: LeadDetails = req.into();
        assert_eq!(lead.job_title, "Head of IT");
        assert!(lead.phone.is_none());
        assert!(!lead.is_anonymous());
    }

    #[test]
    fn error_response_uses_error_code_vocabulary() {
        let error = ErrorResponse::new(ErrorCode::AssessmentNotFound, "gone");
        assert_eq!(error.code, "ASSESSMENT_NOT_FOUND");
        assert_eq!(ErrorResponse::bad_request("bad").code, "VALIDATION_FAILED");
    }
}
