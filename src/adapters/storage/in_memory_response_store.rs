//! In-Memory Response Store Adapter
//!
//! Keeps assessment responses and leads in process memory.
//! Used for development, tests and single-instance deployments.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::assessment::{LeadDetails, Response, ResponseSet};
use crate::domain::foundation::AssessmentId;
use crate::ports::{ResponseStore, ResponseStoreError};

/// In-memory storage for assessment state
#[derive(Debug, Clone)]
pub struct InMemoryResponseStore {
    responses: Arc<RwLock<HashMap<AssessmentId, ResponseSet>>>,
    leads: Arc<RwLock<HashMap<AssessmentId, LeadDetails>>>,
}

impl InMemoryResponseStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self {
            responses: Arc::new(RwLock::new(HashMap::new())),
            leads: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.responses.write().await.clear();
        self.leads.write().await.clear();
    }

    /// Get the number of stored assessments
    pub async fn assessment_count(&self) -> usize {
        self.responses.read().await.len()
    }
}

impl Default for InMemoryResponseStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResponseStore for InMemoryResponseStore {
    async fn save_responses(
        &self,
        id: AssessmentId,
        responses: &ResponseSet,
    ) -> Result<(), ResponseStoreError> {
        let mut stored = self.responses.write().await;
        stored.insert(id, responses.clone());
        Ok(())
    }

    async fn load_responses(&self, id: AssessmentId) -> Result<ResponseSet, ResponseStoreError> {
        let stored = self.responses.read().await;
        stored
            .get(&id)
            .cloned()
            .ok_or(ResponseStoreError::NotFound(id))
    }

    async fn upsert_response(
        &self,
        id: AssessmentId,
        response: Response,
    ) -> Result<ResponseSet, ResponseStoreError> {
        let mut stored = self.responses.write().await;
        let responses = stored.get_mut(&id).ok_or(ResponseStoreError::NotFound(id))?;
        responses.upsert(response);
        Ok(responses.clone())
    }

    async fn save_lead(&self, id: AssessmentId, lead: &LeadDetails) -> Result<(), ResponseStoreError> {
        let mut leads = self.leads.write().await;
        leads.insert(id, lead.clone());
        Ok(())
    }

    async fn load_lead(&self, id: AssessmentId) -> Result<Option<LeadDetails>, ResponseStoreError> {
        let leads = self.leads.read().await;
        Ok(leads.get(&id).cloned())
    }

    async fn exists(&self, id: AssessmentId) -> Result<bool, ResponseStoreError> {
        let stored = self.responses.read().await;
        Ok(stored.contains_key(&id))
    }

    async fn delete(&self, id: AssessmentId) -> Result<(), ResponseStoreError> {
        self.responses.write().await.remove(&id);
        self.leads.write().await.remove(&id);
        Ok(())
    }
}
