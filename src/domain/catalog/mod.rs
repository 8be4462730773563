//! Catalog module - the immutable question set.
//!
//! Questions, their answer options and visibility rules are defined once
//! and shared read-only by every assessment.

pub mod ids;
mod question;
mod registry;
mod standard;

pub use question::{
    AnswerOption, Condition, ConditionValue, ImpactTier, Operator, Question, QuestionKind,
    SliderAnchor, VisibilityRule, SLIDER_ANCHOR_TOLERANCE,
};
pub use registry::{Catalog, CatalogError};
