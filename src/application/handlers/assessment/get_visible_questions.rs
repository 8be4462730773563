//! GetVisibleQuestionsHandler - Query the questions that currently apply.

use std::sync::Arc;

use super::AssessmentError;
use crate::domain::catalog::{Catalog, Question};
use crate::domain::foundation::AssessmentId;
use crate::domain::visibility::VisibilityResolver;
use crate::ports::ResponseStore;

/// Query for the visible question list.
#[derive(Debug, Clone)]
pub struct GetVisibleQuestionsQuery {
    pub assessment_id: AssessmentId,
}

/// Visible questions in catalog order, plus how many already have answers.
#[derive(Debug, Clone)]
pub struct GetVisibleQuestionsResult {
    pub questions: Vec<Question>,
    pub answered: usize,
}

/// Handler for the visible question query.
pub struct GetVisibleQuestionsHandler {
    catalog: Arc<Catalog>,
    store: Arc<dyn ResponseStore>,
}

impl GetVisibleQuestionsHandler {
    pub fn new(catalog: Arc<Catalog>, store: Arc<dyn ResponseStore>) -> Self {
        Self { catalog, store }
    }

    pub async fn handle(
        &self,
        query: GetVisibleQuestionsQuery,
    ) -> Result<GetVisibleQuestionsResult, AssessmentError> {
        let responses = self.store.load_responses(query.assessment_id).await?;

        let visible = VisibilityResolver::visible_questions(&self.catalog, &responses);
        let answered = visible
            .iter()
            .filter(|q| responses.get(&q.id).is_some_and(|r| r.answers(q)))
            .count();

        Ok(GetVisibleQuestionsResult {
            questions: visible.into_iter().cloned().collect(),
            answered,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryResponseStore;
    use crate::domain::assessment::{Response, ResponseSet};
    use crate::domain::catalog::ids;

    fn handler(store: Arc<InMemoryResponseStore>) -> GetVisibleQuestionsHandler {
        GetVisibleQuestionsHandler::new(Arc::new(Catalog::standard().clone()), store)
    }

    #[tokio::test]
    async fn reflects_stored_answers() {
        let store = Arc::new(InMemoryResponseStore::new());
        let id = AssessmentId::new();
        let responses: ResponseSet = vec![
            Response::selected(ids::USER_PROFICIENCY, &["novice"]),
            Response::selected(ids::ORG_PROFILE, &["startup"]),
        ]
        .into_iter()
        .collect();
        store.save_responses(id, &responses).await.unwrap();

        let result = handler(store)
            .handle(GetVisibleQuestionsQuery { assessment_id: id })
            .await
            .unwrap();

        assert!(result.questions.iter().any(|q| q.id == ids::STARTUP_PRIORITIES));
        assert!(!result.questions.iter().any(|q| q.id == ids::THREAT_PRIORITIES));
        assert_eq!(result.answered, 2);
    }

    #[tokio::test]
    async fn hidden_answers_are_not_counted() {
        let store = Arc::new(InMemoryResponseStore::new());
        let id = AssessmentId::new();
        let responses: ResponseSet = vec![
            Response::selected(ids::ORG_PROFILE, &["sme"]),
            Response::selected(ids::ENTERPRISE_COMPLEXITY, &["multi-cloud"]),
        ]
        .into_iter()
        .collect();
        store.save_responses(id, &responses).await.unwrap();

        let result = handler(store)
            .handle(GetVisibleQuestionsQuery { assessment_id: id })
            .await
            .unwrap();

        assert_eq!(result.answered, 1);
    }

    #[tokio::test]
    async fn unknown_assessment_is_not_found() {
        let err = handler(Arc::new(InMemoryResponseStore::new()))
            .handle(GetVisibleQuestionsQuery {
                assessment_id: AssessmentId::new(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AssessmentError::NotFound(_)));
    }
}
