//! Route configuration for assessment endpoints.
//!
//! Configures Axum router with assessment-related routes.

use axum::routing::{delete, get, post, put};
use axum::Router;

use super::handlers::{
    capture_lead, delete_assessment, get_results, get_visible_questions, list_questions,
    start_assessment, submit_response, AssessmentAppState,
};

/// Creates the assessment router with all endpoints.
///
/// Routes:
/// - `GET /api/questions` - Full question catalog
/// - `POST /api/assessments` - Start or restart an assessment
/// - `GET /api/assessments/:id/questions` - Currently visible questions
/// - `PUT /api/assessments/:id/responses` - Record one answer
/// - `POST /api/assessments/:id/lead` - Capture or skip lead details
/// - `GET /api/assessments/:id/results` - Full report
/// - `DELETE /api/assessments/:id` - Discard an assessment
pub fn assessment_router() -> Router<AssessmentAppState> {
    Router::new()
        .route("/api/questions", get(list_questions))
        .route("/api/assessments", post(start_assessment))
        .route("/api/assessments/:id", delete(delete_assessment))
        .route("/api/assessments/:id/questions", get(get_visible_questions))
        .route("/api/assessments/:id/responses", put(submit_response))
        .route("/api/assessments/:id/lead", post(capture_lead))
        .route("/api/assessments/:id/results", get(get_results))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryResponseStore;
    use crate::domain::catalog::Catalog;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let state = AssessmentAppState::new(
            Arc::new(Catalog::standard().clone()),
            Arc::new(InMemoryResponseStore::new()),
        );
        assessment_router().with_state(state)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn assessment_router_mounts_catalog_endpoint() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/questions")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["questions"].as_array().unwrap().len(), 23);
    }

    #[tokio::test]
    async fn start_without_body_creates_assessment() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/assessments")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert!(json["assessmentId"].is_string());
        assert_eq!(json["questions"][0]["id"], "currency-preference");
    }

    #[tokio::test]
    async fn malformed_id_is_rejected() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/assessments/not-a-uuid/results")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_FAILED");
    }

    #[tokio::test]
    async fn unknown_assessment_is_404() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri(format!(
                        "/api/assessments/{}/responses",
                        crate::domain::foundation::AssessmentId::new()
                    ))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"questionId":"org-profile","selectedOptions":["sme"]}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["code"], "ASSESSMENT_NOT_FOUND");
    }
}
