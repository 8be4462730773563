//! SubmitResponseHandler - Command handler for recording one answer.

use std::sync::Arc;

use tracing::{debug, warn};

use super::AssessmentError;
use crate::domain::assessment::Response;
use crate::domain::catalog::{Catalog, Question, QuestionKind};
use crate::domain::compliance::{is_compliance_complex, selected_framework_count};
use crate::domain::foundation::{AssessmentId, ValidationError};
use crate::domain::scoring::{LiveScore, LiveScorer};
use crate::domain::visibility::VisibilityResolver;
use crate::ports::ResponseStore;

const SLIDER_MIN: f64 = 0.0;
const SLIDER_MAX: f64 = 100.0;

/// Command to submit (or resubmit) the answer to one question.
#[derive(Debug, Clone)]
pub struct SubmitResponseCommand {
    pub assessment_id: AssessmentId,
    pub response: Response,
}

/// Result of recording an answer.
#[derive(Debug, Clone)]
pub struct SubmitResponseResult {
    pub live_score: LiveScore,
    pub visible_questions: Vec<Question>,
    /// Set when the selected frameworks cross the complexity threshold.
    pub compliance_complexity_warning: bool,
}

/// Handler for submitting responses.
pub struct SubmitResponseHandler {
    catalog: Arc<Catalog>,
    store: Arc<dyn ResponseStore>,
}

impl SubmitResponseHandler {
    pub fn new(catalog: Arc<Catalog>, store: Arc<dyn ResponseStore>) -> Self {
        Self { catalog, store }
    }

    pub async fn handle(
        &self,
        cmd: SubmitResponseCommand,
    ) -> Result<SubmitResponseResult, AssessmentError> {
        // 1. Validate against the catalog
        let Some(question) = self.catalog.get(&cmd.response.question_id) else {
            warn!(
                assessment_id = %cmd.assessment_id,
                question_id = %cmd.response.question_id,
                "Rejected response to unknown question"
            );
            return Err(AssessmentError::UnknownQuestion(cmd.response.question_id));
        };
        validate_slider(question, &cmd.response)?;

        // 2. Overwrite and persist as one step
        let responses = self
            .store
            .upsert_response(cmd.assessment_id, cmd.response)
            .await?;

        // 3. Recompute what the respondent sees next
        let live_score = LiveScorer::calculate(&self.catalog, &responses);
        let visible_questions = VisibilityResolver::visible_questions(&self.catalog, &responses)
            .into_iter()
            .cloned()
            .collect();
        let framework_count =
            selected_framework_count(&VisibilityResolver::retain_visible(&self.catalog, &responses));

        debug!(
            assessment_id = %cmd.assessment_id,
            answered = responses.len(),
            live_score = live_score.score.value(),
            framework_count,
            "Response recorded"
        );

        Ok(SubmitResponseResult {
            live_score,
            visible_questions,
            compliance_complexity_warning: is_compliance_complex(framework_count),
        })
    }
}

fn validate_slider(question: &Question, response: &Response) -> Result<(), ValidationError> {
    let (QuestionKind::Slider { .. }, Some(value)) = (&question.kind, response.slider_value) else {
        return Ok(());
    };
    if !value.is_finite() || !(SLIDER_MIN..=SLIDER_MAX).contains(&value) {
        return Err(ValidationError::out_of_range(
            "sliderValue",
            SLIDER_MIN as i32,
            SLIDER_MAX as i32,
            value as i32,
        ));
    }
    Ok(())
}
