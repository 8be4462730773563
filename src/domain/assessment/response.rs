//! Answers and the session-scoped collection that holds them.

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::catalog::{Question, QuestionKind};

/// One answer to one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub question_id: String,
    #[serde(default)]
    pub selected_options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slider_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_value: Option<String>,
}

impl Response {
    /// A choice answer.
    pub fn selected<S: AsRef<str>>(question_id: &str, options: &[S]) -> Self {
        Self {
            question_id: question_id.to_string(),
            selected_options: options.iter().map(|o| o.as_ref().to_string()).collect(),
            slider_value: None,
            text_value: None,
        }
    }

    /// A slider answer.
    pub fn slider(question_id: &str, value: f64) -> Self {
        Self {
            question_id: question_id.to_string(),
            selected_options: Vec::new(),
            slider_value: Some(value),
            text_value: None,
        }
    }

    /// A free-text answer.
    pub fn text(question_id: &str, value: impl Into<String>) -> Self {
        Self {
            question_id: question_id.to_string(),
            selected_options: Vec::new(),
            slider_value: None,
            text_value: Some(value.into()),
        }
    }

    pub fn includes(&self, option_id: &str) -> bool {
        self.selected_options.iter().any(|o| o == option_id)
    }

    pub fn first_selection(&self) -> Option<&str> {
        self.selected_options.first().map(String::as_str)
    }

    /// Whether this response carries what `question` needs to count as answered.
    pub fn answers(&self, question: &Question) -> bool {
        match question.kind {
            QuestionKind::Slider { .. } => self.slider_value.is_some(),
            QuestionKind::SingleSelect { .. } | QuestionKind::MultiSelect { .. } => {
                !self.selected_options.is_empty()
            }
            QuestionKind::Text => self
                .text_value
                .as_deref()
                .is_some_and(|t| !t.trim().is_empty()),
        }
    }
}

/// The responses of one assessment, at most one per question.
///
/// Ordered by recency of the last write: an upsert moves the response to
/// the end. Deserializing a stored array applies the same upsert, so a
/// repeated question keeps only its last write.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResponseSet(Vec<Response>);

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the response for its question.
    pub fn upsert(&mut self, response: Response) {
        self.0.retain(|r| r.question_id != response.question_id);
        self.0.push(response);
    }

    pub fn get(&self, question_id: &str) -> Option<&Response> {
        self.0.iter().find(|r| r.question_id == question_id)
    }

    /// Selections for a question, empty when unanswered.
    pub fn selected(&self, question_id: &str) -> &[String] {
        self.get(question_id)
            .map(|r| r.selected_options.as_slice())
            .unwrap_or(&[])
    }

    pub fn includes(&self, question_id: &str, option_id: &str) -> bool {
        self.get(question_id).is_some_and(|r| r.includes(option_id))
    }

    pub fn first_selection(&self, question_id: &str) -> Option<&str> {
        self.get(question_id).and_then(Response::first_selection)
    }

    pub fn slider_value(&self, question_id: &str) -> Option<f64> {
        self.get(question_id).and_then(|r| r.slider_value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Response> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl FromIterator<Response> for ResponseSet {
    fn from_iter<I: IntoIterator<Item = Response>>(iter: I) -> Self {
        let mut set = ResponseSet::new();
        for response in iter {
            set.upsert(response);
        }
        set
    }
}

impl<'de> Deserialize<'de> for ResponseSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<Response>::deserialize(deserializer).map(|responses| responses.into_iter().collect())
    }
}
