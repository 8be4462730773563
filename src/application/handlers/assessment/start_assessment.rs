//! StartAssessmentHandler - Command handler for beginning (or restarting) an assessment.

use std::sync::Arc;

use tracing::{debug, info};

use super::AssessmentError;
use crate::domain::assessment::ResponseSet;
use crate::domain::catalog::{Catalog, Question};
use crate::domain::foundation::AssessmentId;
use crate::domain::visibility::VisibilityResolver;
use crate::ports::ResponseStore;

/// Command to start an assessment.
#[derive(Debug, Clone, Default)]
pub struct StartAssessmentCommand {
    /// Assessment being abandoned; its stored state is discarded.
    pub previous: Option<AssessmentId>,
}

/// Result of starting an assessment.
#[derive(Debug, Clone)]
pub struct StartAssessmentResult {
    pub assessment_id: AssessmentId,
    pub visible_questions: Vec<Question>,
}

/// Handler for starting assessments.
pub struct StartAssessmentHandler {
    catalog: Arc<Catalog>,
    store: Arc<dyn ResponseStore>,
}

impl StartAssessmentHandler {
    pub fn new(catalog: Arc<Catalog>, store: Arc<dyn ResponseStore>) -> Self {
        Self { catalog, store }
    }

    pub async fn handle(
        &self,
        cmd: StartAssessmentCommand,
    ) -> Result<StartAssessmentResult, AssessmentError> {
        // 1. Reset - drop whatever the previous run stored
        if let Some(previous) = cmd.previous {
            self.store.delete(previous).await?;
            debug!(assessment_id = %previous, "Previous assessment discarded");
        }

        // 2. Persist an empty response set under a fresh id
        let assessment_id = AssessmentId::new();
        let responses = ResponseSet::new();
        self.store.save_responses(assessment_id, &responses).await?;

        // 3. Only the bootstrap and unconditional questions apply so far
        let visible_questions = VisibilityResolver::visible_questions(&self.catalog, &responses)
            .into_iter()
            .cloned()
            .collect();

        info!(assessment_id = %assessment_id, "Assessment started");

        Ok(StartAssessmentResult {
            assessment_id,
            visible_questions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryResponseStore;
    use crate::domain::assessment::{LeadDetails, Response};
    use crate::domain::catalog::ids;

    fn handler(store: Arc<InMemoryResponseStore>) -> StartAssessmentHandler {
        StartAssessmentHandler::new(Arc::new(Catalog::standard().clone()), store)
    }

    #[tokio::test]
    async fn creates_an_empty_assessment() {
        let store = Arc::new(InMemoryResponseStore::new());
        let result = handler(store.clone())
            .handle(StartAssessmentCommand::default())
            .await
            .unwrap();

        assert!(store.exists(result.assessment_id).await.unwrap());
        assert!(store.load_responses(result.assessment_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn initial_questions_start_with_bootstrap() {
        let store = Arc::new(InMemoryResponseStore::new());
        let result = handler(store)
            .handle(StartAssessmentCommand::default())
            .await
            .unwrap();

        assert_eq!(result.visible_questions[0].id, ids::CURRENCY_PREFERENCE);
        assert_eq!(result.visible_questions[1].id, ids::USER_PROFICIENCY);
        assert!(!result
            .visible_questions
            .iter()
            .any(|q| q.id == ids::ENTERPRISE_COMPLEXITY));
    }

    #[tokio::test]
    async fn restart_discards_previous_state() {
        let store = Arc::new(InMemoryResponseStore::new());
        let previous = AssessmentId::new();
        let answered: ResponseSet = vec![Response::selected(ids::ORG_PROFILE, &["sme"])]
            .into_iter()
            .collect();
        store.save_responses(previous, &answered).await.unwrap();
        store.save_lead(previous, &LeadDetails::anonymous()).await.unwrap();

        let result = handler(store.clone())
            .handle(StartAssessmentCommand {
                previous: Some(previous),
            })
            .await
            .unwrap();

        assert_ne!(result.assessment_id, previous);
        assert!(!store.exists(previous).await.unwrap());
        assert!(store.load_lead(previous).await.unwrap().is_none());
        assert_eq!(store.assessment_count().await, 1);
    }
}
