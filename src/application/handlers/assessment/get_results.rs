//! GetResultsHandler - Query the full assessment report.

use std::sync::Arc;

use tracing::{debug, warn};

use super::AssessmentError;
use crate::domain::assessment::LeadDetails;
use crate::domain::catalog::Catalog;
use crate::domain::foundation::AssessmentId;
use crate::domain::results::{generate_assessment_results, AssessmentResults};
use crate::ports::ResponseStore;

/// Query for an assessment's results.
#[derive(Debug, Clone)]
pub struct GetResultsQuery {
    pub assessment_id: AssessmentId,
}

/// The report plus whatever lead details were captured.
#[derive(Debug, Clone)]
pub struct GetResultsResult {
    pub results: AssessmentResults,
    pub lead: Option<LeadDetails>,
}

/// Handler for the results query.
pub struct GetResultsHandler {
    catalog: Arc<Catalog>,
    store: Arc<dyn ResponseStore>,
}

impl GetResultsHandler {
    pub fn new(catalog: Arc<Catalog>, store: Arc<dyn ResponseStore>) -> Self {
        Self { catalog, store }
    }

    pub async fn handle(&self, query: GetResultsQuery) -> Result<GetResultsResult, AssessmentError> {
        let responses = self.store.load_responses(query.assessment_id).await?;
        if responses.is_empty() {
            warn!(assessment_id = %query.assessment_id, "Results requested before any answer");
            return Err(AssessmentError::NoResponses(query.assessment_id));
        }

        let results = generate_assessment_results(&self.catalog, &responses);
        let lead = self.store.load_lead(query.assessment_id).await?;

        debug!(
            assessment_id = %query.assessment_id,
            overall = results.risk_score.overall.value(),
            category = results.risk_score.category.label(),
            recommendations = results.service_recommendations.len(),
            "Results computed"
        );

        Ok(GetResultsResult { results, lead })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryResponseStore;
    use crate::domain::assessment::{Response, ResponseSet};
    use crate::domain::catalog::ids;

    fn handler(store: Arc<InMemoryResponseStore>) -> GetResultsHandler {
        GetResultsHandler::new(Arc::new(Catalog::standard().clone()), store)
    }

    #[tokio::test]
    async fn empty_assessment_has_no_results() {
        let store = Arc::new(InMemoryResponseStore::new());
        let id = AssessmentId::new();
        store.save_responses(id, &ResponseSet::new()).await.unwrap();

        let err = handler(store)
            .handle(GetResultsQuery { assessment_id: id })
            .await
            .unwrap_err();

        assert!(matches!(err, AssessmentError::NoResponses(_)));
    }

    #[tokio::test]
    async fn returns_results_and_lead() {
        let store = Arc::new(InMemoryResponseStore::new());
        let id = AssessmentId::new();
        let responses: ResponseSet = vec![
            Response::selected(ids::ORG_PROFILE, &["enterprise"]),
            Response::selected(ids::THREAT_PRIORITIES, &["ransomware", "phishing"]),
        ]
        .into_iter()
        .collect();
        store.save_responses(id, &responses).await.unwrap();
        store.save_lead(id, &LeadDetails::anonymous()).await.unwrap();

        let result = handler(store)
            .handle(GetResultsQuery { assessment_id: id })
            .await
            .unwrap();

        assert_eq!(result.results.threat_profile, vec!["ransomware", "phishing"]);
        assert!(result.lead.unwrap().is_anonymous());
    }

    #[tokio::test]
    async fn results_without_lead() {
        let store = Arc::new(InMemoryResponseStore::new());
        let id = AssessmentId::new();
        let responses: ResponseSet = vec![Response::selected(ids::ORG_PROFILE, &["sme"])]
            .into_iter()
            .collect();
        store.save_responses(id, &responses).await.unwrap();

        let result = handler(store)
            .handle(GetResultsQuery { assessment_id: id })
            .await
            .unwrap();

        assert!(result.lead.is_none());
    }
}
