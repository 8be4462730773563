//! DeleteAssessmentHandler - Command handler for discarding an assessment.

use std::sync::Arc;

use tracing::info;

use super::AssessmentError;
use crate::domain::foundation::AssessmentId;
use crate::ports::ResponseStore;

#[derive(Debug, Clone)]
pub struct DeleteAssessmentCommand {
    pub assessment_id: AssessmentId,
}

/// Handler for deleting assessments. Deleting an unknown id succeeds.
pub struct DeleteAssessmentHandler {
    store: Arc<dyn ResponseStore>,
}

impl DeleteAssessmentHandler {
    pub fn new(store: Arc<dyn ResponseStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: DeleteAssessmentCommand) -> Result<(), AssessmentError> {
        self.store.delete(cmd.assessment_id).await?;
        info!(assessment_id = %cmd.assessment_id, "Assessment deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryResponseStore;
    use crate::domain::assessment::ResponseSet;

    #[tokio::test]
    async fn removes_stored_state() {
        let store = Arc::new(InMemoryResponseStore::new());
        let id = AssessmentId::new();
        store.save_responses(id, &ResponseSet::new()).await.unwrap();

        DeleteAssessmentHandler::new(store.clone())
            .handle(DeleteAssessmentCommand { assessment_id: id })
            .await
            .unwrap();

        assert!(!store.exists(id).await.unwrap());
    }

    #[tokio::test]
    async fn unknown_id_is_ok() {
        let result = DeleteAssessmentHandler::new(Arc::new(InMemoryResponseStore::new()))
            .handle(DeleteAssessmentCommand {
                assessment_id: AssessmentId::new(),
            })
            .await;

        assert!(result.is_ok());
    }
}
