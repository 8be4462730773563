//! The validated, read-only question catalog.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

use super::question::{Question, QuestionKind};
use super::standard;

static STANDARD: Lazy<Catalog> = Lazy::new(|| Catalog::assemble(standard::questions()));

/// Reasons a catalog document is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("Catalog contains no questions")]
    Empty,

    #[error("Question at position {0} has an empty id")]
    EmptyQuestionId(usize),

    #[error("Duplicate question id: {0}")]
    DuplicateQuestion(String),

    #[error("Question {question_id} has duplicate option id: {option_id}")]
    DuplicateOption {
        question_id: String,
        option_id: String,
    },

    #[error("Question {question_id} has invalid weight {weight}")]
    InvalidWeight { question_id: String, weight: f64 },

    #[error("Question {0} has no options")]
    MissingOptions(String),

    #[error("Question {question_id} has a condition on unknown question {target}")]
    UnknownConditionTarget { question_id: String, target: String },

    #[error("Failed to parse catalog: {0}")]
    Parse(String),
}

#[derive(Deserialize)]
struct CatalogDocument {
    questions: Vec<Question>,
}

/// Ordered set of questions with id lookup.
#[derive(Debug, Clone)]
pub struct Catalog {
    questions: Vec<Question>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Validates and wraps a question list.
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        validate(&questions)?;
        Ok(Self::assemble(questions))
    }

    /// Parses a YAML document with a top-level `questions` list.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument =
            serde_yaml::from_str(yaml).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::new(doc.questions)
    }

    /// The built-in catalog, constructed on first use and shared thereafter.
    pub fn standard() -> &'static Catalog {
        &STANDARD
    }

    fn assemble(questions: Vec<Question>) -> Self {
        let index = questions
            .iter()
            .enumerate()
            .map(|(i, q)| (q.id.clone(), i))
            .collect();
        Self { questions, index }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, question_id: &str) -> Option<&Question> {
        self.index.get(question_id).map(|&i| &self.questions[i])
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.index.contains_key(question_id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

fn validate(questions: &[Question]) -> Result<(), CatalogError> {
    if questions.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut seen = HashSet::new();
    for (position, q) in questions.iter().enumerate() {
        if q.id.trim().is_empty() {
            return Err(CatalogError::EmptyQuestionId(position));
        }
        if !seen.insert(q.id.as_str()) {
            return Err(CatalogError::DuplicateQuestion(q.id.clone()));
        }
        if !q.weight.is_finite() || q.weight < 0.0 {
            return Err(CatalogError::InvalidWeight {
                question_id: q.id.clone(),
                weight: q.weight,
            });
        }

        let option_ids: Vec<&str> = match &q.kind {
            QuestionKind::SingleSelect { options } | QuestionKind::MultiSelect { options } => {
                if options.is_empty() {
                    return Err(CatalogError::MissingOptions(q.id.clone()));
                }
                options.iter().map(|o| o.id.as_str()).collect()
            }
            QuestionKind::Slider { anchors } => anchors.iter().map(|a| a.id.as_str()).collect(),
            QuestionKind::Text => Vec::new(),
        };
        let mut option_seen = HashSet::new();
        for option_id in option_ids {
            if !option_seen.insert(option_id) {
                return Err(CatalogError::DuplicateOption {
                    question_id: q.id.clone(),
                    option_id: option_id.to_string(),
                });
            }
        }
    }

    for q in questions {
        if let Some(condition) = q
            .visibility
            .conditions()
            .find(|c| !seen.contains(c.question_id.as_str()))
        {
            return Err(CatalogError::UnknownConditionTarget {
                question_id: q.id.clone(),
                target: condition.question_id.clone(),
            });
        }
    }

    Ok(())
}
