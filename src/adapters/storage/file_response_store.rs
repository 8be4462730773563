//! File-based Response Store Adapter
//!
//! Stores each assessment as a directory of JSON files:
//!
//! ```text
//! <base>/<assessment_id>/responses.json
//! <base>/<assessment_id>/lead.json
//! ```
//!
//! Files are written to a temporary sibling and renamed into place, so a
//! reader never sees a partially written file. Writes to one assessment are
//! serialised through a per-assessment lock.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::assessment::{LeadDetails, Response, ResponseSet};
use crate::domain::foundation::AssessmentId;
use crate::ports::{ResponseStore, ResponseStoreError};

const RESPONSES_FILE: &str = "responses.json";
const LEAD_FILE: &str = "lead.json";

/// File-based storage for assessment state
#[derive(Debug, Clone)]
pub struct FileResponseStore {
    base_path: PathBuf,
    locks: Arc<Mutex<HashMap<AssessmentId, Arc<Mutex<()>>>>>,
}

impl FileResponseStore {
    /// Create a new file store rooted at a base directory
    ///
    /// # Arguments
    /// * `base_path` - The root directory holding one subdirectory per assessment
    ///
    /// # Example
    /// ```ignore
    /// let store = FileResponseStore::new("./data/assessments");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
            locks: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn assessment_dir(&self, id: AssessmentId) -> PathBuf {
        self.base_path.join(id.to_string())
    }

    fn responses_path(&self, id: AssessmentId) -> PathBuf {
        self.assessment_dir(id).join(RESPONSES_FILE)
    }

    fn lead_path(&self, id: AssessmentId) -> PathBuf {
        self.assessment_dir(id).join(LEAD_FILE)
    }

    /// Write lock for one assessment.
    async fn lock_for(&self, id: AssessmentId) -> Arc<Mutex<()>> {
        self.locks.lock().await.entry(id).or_default().clone()
    }

    async fn write_json<T: Serialize + ?Sized>(
        &self,
        id: AssessmentId,
        file_name: &str,
        value: &T,
    ) -> Result<(), ResponseStoreError> {
        let dir = self.assessment_dir(id);
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| ResponseStoreError::IoError(e.to_string()))?;

        let json = serde_json::to_string_pretty(value)
            .map_err(|e| ResponseStoreError::SerializationFailed(e.to_string()))?;

        let temp_path = dir.join(format!(".{file_name}.{}.tmp", Uuid::new_v4()));
        fs::write(&temp_path, json)
            .await
            .map_err(|e| ResponseStoreError::IoError(e.to_string()))?;

        if let Err(e) = fs::rename(&temp_path, dir.join(file_name)).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(ResponseStoreError::IoError(e.to_string()));
        }
        Ok(())
    }

    async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ResponseStoreError> {
        let json = fs::read_to_string(path)
            .await
            .map_err(|e| ResponseStoreError::IoError(e.to_string()))?;

        serde_json::from_str(&json).map_err(|e| ResponseStoreError::DeserializationFailed(e.to_string()))
    }
}

#[async_trait]
impl ResponseStore for FileResponseStore {
    async fn save_responses(
        &self,
        id: AssessmentId,
        responses: &ResponseSet,
    ) -> Result<(), ResponseStoreError> {
        let lock = self.lock_for(id).await;
        let _guard = lock.lock().await;
        self.write_json(id, RESPONSES_FILE, responses).await
    }

    async fn load_responses(&self, id: AssessmentId) -> Result<ResponseSet, ResponseStoreError> {
        let path = self.responses_path(id);
        if !path.exists() {
            return Err(ResponseStoreError::NotFound(id));
        }
        Self::read_json(&path).await
    }

    async fn upsert_response(
        &self,
        id: AssessmentId,
        response: Response,
    ) -> Result<ResponseSet, ResponseStoreError> {
        let lock = self.lock_for(id).await;
        let _guard = lock.lock().await;

        let mut responses = self.load_responses(id).await?;
        responses.upsert(response);
        self.write_json(id, RESPONSES_FILE, &responses).await?;
        Ok(responses)
    }

    async fn save_lead(&self, id: AssessmentId, lead: &LeadDetails) -> Result<(), ResponseStoreError> {
        self.write_json(id, LEAD_FILE, lead).await
    }

    async fn load_lead(&self, id: AssessmentId) -> Result<Option<LeadDetails>, ResponseStoreError> {
        let path = self.lead_path(id);
        if !path.exists() {
            return Ok(None);
        }
        Self::read_json(&path).await.map(Some)
    }

    async fn exists(&self, id: AssessmentId) -> Result<bool, ResponseStoreError> {
        Ok(self.responses_path(id).exists())
    }

    async fn delete(&self, id: AssessmentId) -> Result<(), ResponseStoreError> {
        let lock = self.lock_for(id).await;
        let _guard = lock.lock().await;
        let dir = self.assessment_dir(id);

        if dir.exists() {
            fs::remove_dir_all(&dir)
                .await
                .map_err(|e| ResponseStoreError::IoError(e.to_string()))?;
        }

        self.locks.lock().await.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::Response;
    use tempfile::TempDir;

    fn sample_responses() -> ResponseSet {
        vec![
            Response::selected("threat-priorities", &["ransomware", "phishing"]),
            Response::slider("budget-flexibility", 25.0),
            Response::text("notes", "board wants a plan"),
        ]
        .into_iter()
        .collect()
    }

    #[tokio::test]
    async fn save_and_load_responses() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileResponseStore::new(temp_dir.path());
        let id = AssessmentId::new();

        store.save_responses(id, &sample_responses()).await.unwrap();

        assert_eq!(store.load_responses(id).await.unwrap(), sample_responses());
        assert!(temp_dir.path().join(id.to_string()).join("responses.json").exists());
    }

    #[tokio::test]
    async fn load_missing_assessment_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileResponseStore::new(temp_dir.path());

        let result = store.load_responses(AssessmentId::new()).await;

        assert!(matches!(result, Err(ResponseStoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn responses_file_is_a_camel_case_array() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileResponseStore::new(temp_dir.path());
        let id = AssessmentId::new();

        store.save_responses(id, &sample_responses()).await.unwrap();

        let raw = std::fs::read_to_string(store.responses_path(id)).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["questionId"], "threat-priorities");
        assert_eq!(json[1]["sliderValue"], 25.0);
    }

    #[tokio::test]
    async fn stored_array_with_repeated_question_keeps_last_write() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileResponseStore::new(temp_dir.path());
        let id = AssessmentId::new();

        std::fs::create_dir_all(store.assessment_dir(id)).unwrap();
        std::fs::write(
            store.responses_path(id),
            r#"[{"questionId":"cyber-maturity","selectedOptions":["advanced"]},
                {"questionId":"cyber-maturity","selectedOptions":["ad-hoc"]}]"#,
        )
        .unwrap();

        let loaded = store.load_responses(id).await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.first_selection("cyber-maturity"), Some("ad-hoc"));
    }

    #[tokio::test]
    async fn concurrent_upserts_keep_every_answer() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileResponseStore::new(temp_dir.path());
        let id = AssessmentId::new();
        store.save_responses(id, &ResponseSet::new()).await.unwrap();

        let questions = [
            "org-profile",
            "cyber-maturity",
            "threat-priorities",
            "compliance-needs",
            "security-incidents",
            "urgency-timeline",
        ];
        let tasks: Vec<_> = questions
            .iter()
            .map(|question| {
                let store = store.clone();
                let response = Response::selected(question, &["x"]);
                tokio::spawn(async move { store.upsert_response(id, response).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let loaded = store.load_responses(id).await.unwrap();
        assert_eq!(loaded.len(), questions.len());
        for question in questions {
            assert!(loaded.get(question).is_some(), "lost answer to {question}");
        }
    }

    #[tokio::test]
    async fn writes_leave_no_temporary_files() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileResponseStore::new(temp_dir.path());
        let id = AssessmentId::new();

        store.save_responses(id, &sample_responses()).await.unwrap();
        store
            .upsert_response(id, Response::selected("org-profile", &["sme"]))
            .await
            .unwrap();
        store.save_lead(id, &LeadDetails::anonymous()).await.unwrap();

        let mut names: Vec<String> = std::fs::read_dir(store.assessment_dir(id))
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["lead.json", "responses.json"]);
    }

    #[tokio::test]
    async fn upsert_on_missing_assessment_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileResponseStore::new(temp_dir.path());

        let result = store
            .upsert_response(AssessmentId::new(), Response::selected("org-profile", &["sme"]))
            .await;

        assert!(matches!(result, Err(ResponseStoreError::NotFound(_))));
        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn corrupt_file_is_a_deserialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileResponseStore::new(temp_dir.path());
        let id = AssessmentId::new();

        std::fs::create_dir_all(store.assessment_dir(id)).unwrap();
        std::fs::write(store.responses_path(id), "{not json").unwrap();

        let result = store.load_responses(id).await;
        assert!(matches!(result, Err(ResponseStoreError::DeserializationFailed(_))));
    }

    #[tokio::test]
    async fn lead_round_trips_when_captured() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileResponseStore::new(temp_dir.path());
        let id = AssessmentId::new();

        assert!(store.load_lead(id).await.unwrap().is_none());

        let lead = LeadDetails::anonymous();
        store.save_lead(id, &lead).await.unwrap();

        assert_eq!(store.load_lead(id).await.unwrap(), Some(lead));
    }

    #[tokio::test]
    async fn delete_removes_the_assessment_directory() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileResponseStore::new(temp_dir.path());
        let id = AssessmentId::new();

        store.save_responses(id, &sample_responses()).await.unwrap();
        store.save_lead(id, &LeadDetails::anonymous()).await.unwrap();
        assert!(store.exists(id).await.unwrap());

        store.delete(id).await.unwrap();

        assert!(!store.exists(id).await.unwrap());
        assert!(!store.assessment_dir(id).exists());
    }

    #[tokio::test]
    async fn delete_missing_assessment_is_ok() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileResponseStore::new(temp_dir.path());
        assert!(store.delete(AssessmentId::new()).await.is_ok());
    }
}
