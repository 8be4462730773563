//! Question definitions - the immutable building blocks of the catalog.

use serde::{Deserialize, Serialize};

/// Distance within which a slider value snaps to a labelled anchor.
pub const SLIDER_ANCHOR_TOLERANCE: f64 = 12.5;

/// How strongly an answer moves organisational risk.
///
/// Also used for the live score's impact band, so the score thresholds
/// live here too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactTier {
    Low,
    Medium,
    High,
    Critical,
}

impl ImpactTier {
    /// Maps a 0-100 score onto a tier (<=25 / <=50 / <=75 / above).
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=25 => ImpactTier::Low,
            26..=50 => ImpactTier::Medium,
            51..=75 => ImpactTier::High,
            _ => ImpactTier::Critical,
        }
    }

    /// True for the two upper tiers.
    pub fn is_elevated(&self) -> bool {
        matches!(self, ImpactTier::High | ImpactTier::Critical)
    }
}

/// One selectable answer of a single- or multi-select question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOption {
    pub id: String,
    pub label: String,
    /// Signed; negative values are protective controls that lower risk.
    pub risk_multiplier: f64,
    pub risk_impact: ImpactTier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
}

impl AnswerOption {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        risk_multiplier: f64,
        risk_impact: ImpactTier,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            risk_multiplier,
            risk_impact,
            tooltip: None,
        }
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }
}

/// A labelled point on a 0-100 slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderAnchor {
    pub id: String,
    pub label: String,
    pub value: f64,
    pub risk_multiplier: f64,
    pub risk_impact: ImpactTier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
}

/// The shape of a question and the data each shape carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum QuestionKind {
    SingleSelect { options: Vec<AnswerOption> },
    MultiSelect { options: Vec<AnswerOption> },
    Slider { anchors: Vec<SliderAnchor> },
    Text,
}

/// Comparison applied by a visibility condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operator {
    Includes,
    Excludes,
    Equals,
    GreaterThan,
    LessThan,
    /// Anything unrecognised; always evaluates false.
    #[serde(other)]
    Unknown,
}

/// Right-hand side of a condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionValue {
    Number(f64),
    Text(String),
}

impl ConditionValue {
    /// Numeric view, parsing text when it holds a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ConditionValue::Number(n) => Some(*n),
            ConditionValue::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// A single predicate over a prior answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub question_id: String,
    pub operator: Operator,
    pub value: ConditionValue,
}

impl Condition {
    fn text(question_id: &str, operator: Operator, value: &str) -> Self {
        Self {
            question_id: question_id.to_string(),
            operator,
            value: ConditionValue::Text(value.to_string()),
        }
    }

    pub fn includes(question_id: &str, option_id: &str) -> Self {
        Self::text(question_id, Operator::Includes, option_id)
    }

    pub fn excludes(question_id: &str, option_id: &str) -> Self {
        Self::text(question_id, Operator::Excludes, option_id)
    }

    pub fn equals(question_id: &str, option_id: &str) -> Self {
        Self::text(question_id, Operator::Equals, option_id)
    }

    pub fn greater_than(question_id: &str, value: f64) -> Self {
        Self {
            question_id: question_id.to_string(),
            operator: Operator::GreaterThan,
            value: ConditionValue::Number(value),
        }
    }

    pub fn less_than(question_id: &str, value: f64) -> Self {
        Self {
            question_id: question_id.to_string(),
            operator: Operator::LessThan,
            value: ConditionValue::Number(value),
        }
    }
}

/// Declarative show/hide gates.
///
/// `hide_if` suppresses on any true condition. `show_if`, when present,
/// admits the question only if at least one condition is true.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_if: Option<Vec<Condition>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_if: Option<Vec<Condition>>,
}

impl VisibilityRule {
    /// All conditions across both gates.
    pub fn conditions(&self) -> impl Iterator<Item = &Condition> {
        self.show_if
            .iter()
            .flatten()
            .chain(self.hide_if.iter().flatten())
    }
}

/// A catalog question. Never mutated after the catalog is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    #[serde(default = "default_required")]
    pub required: bool,
    pub weight: f64,
    #[serde(flatten)]
    pub kind: QuestionKind,
    #[serde(default)]
    pub novice_friendly: bool,
    #[serde(default)]
    pub expert_only: bool,
    #[serde(default)]
    pub visibility: VisibilityRule,
}

fn default_required() -> bool {
    true
}

impl Question {
    /// Creates a required question with no audience flags or rules.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        weight: f64,
        kind: QuestionKind,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            tooltip: None,
            required: true,
            weight,
            kind,
            novice_friendly: false,
            expert_only: false,
            visibility: VisibilityRule::default(),
        }
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn novice_friendly(mut self) -> Self {
        self.novice_friendly = true;
        self
    }

    pub fn expert_only(mut self) -> Self {
        self.expert_only = true;
        self
    }

    pub fn show_if(mut self, conditions: Vec<Condition>) -> Self {
        self.visibility.show_if = Some(conditions);
        self
    }

    pub fn hide_if(mut self, conditions: Vec<Condition>) -> Self {
        self.visibility.hide_if = Some(conditions);
        self
    }

    /// Selectable options; empty for sliders and free text.
    pub fn options(&self) -> &[AnswerOption] {
        match &self.kind {
            QuestionKind::SingleSelect { options } | QuestionKind::MultiSelect { options } => {
                options
            }
            QuestionKind::Slider { .. } | QuestionKind::Text => &[],
        }
    }

    pub fn find_option(&self, option_id: &str) -> Option<&AnswerOption> {
        self.options().iter().find(|o| o.id == option_id)
    }

    pub fn has_show_if(&self) -> bool {
        self.visibility.show_if.is_some()
    }

    /// Anchor closest to `value`, if any lies within the snap tolerance.
    pub fn nearest_anchor(&self, value: f64) -> Option<&SliderAnchor> {
        let QuestionKind::Slider { anchors } = &self.kind else {
            return None;
        };
        anchors
            .iter()
            .filter(|a| (a.value - value).abs() <= SLIDER_ANCHOR_TOLERANCE)
            .min_by(|a, b| {
                (a.value - value)
                    .abs()
                    .total_cmp(&(b.value - value).abs())
            })
    }

    /// Largest multiplier any single answer can carry, floored at zero.
    pub fn peak_multiplier(&self) -> f64 {
        let peak = match &self.kind {
            QuestionKind::SingleSelect { options } | QuestionKind::MultiSelect { options } => {
                options.iter().map(|o| o.risk_multiplier).fold(0.0, f64::max)
            }
            QuestionKind::Slider { anchors } => {
                anchors.iter().map(|a| a.risk_multiplier).fold(0.0, f64::max)
            }
            QuestionKind::Text => 0.0,
        };
        peak.max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn budget_slider() -> Question {
        let anchor = |id: &str, value: f64, tier: ImpactTier| SliderAnchor {
            id: id.to_string(),
            label: id.to_string(),
            value,
            risk_multiplier: 1.0,
            risk_impact: tier,
            tooltip: None,
        };
        Question::new(
            "budget",
            "Budget",
            "How flexible?",
            1.0,
            QuestionKind::Slider {
                anchors: vec![
                    anchor("conservative", 25.0, ImpactTier::Medium),
                    anchor("balanced", 50.0, ImpactTier::Low),
                    anchor("aggressive", 75.0, ImpactTier::Low),
                ],
            },
        )
    }

    #[test]
    fn impact_tier_thresholds() {
        assert_eq!(ImpactTier::from_score(0), ImpactTier::Low);
        assert_eq!(ImpactTier::from_score(25), ImpactTier::Low);
        assert_eq!(ImpactTier::from_score(26), ImpactTier::Medium);
        assert_eq!(ImpactTier::from_score(50), ImpactTier::Medium);
        assert_eq!(ImpactTier::from_score(75), ImpactTier::High);
        assert_eq!(ImpactTier::from_score(76), ImpactTier::Critical);
    }

    #[test]
    fn nearest_anchor_picks_closest_within_tolerance() {
        let q = budget_slider();
        assert_eq!(q.nearest_anchor(30.0).unwrap().id, "conservative");
        assert_eq!(q.nearest_anchor(40.0).unwrap().id, "balanced");
        assert_eq!(q.nearest_anchor(62.5).unwrap().id, "balanced");
        assert!(q.nearest_anchor(5.0).is_none());
    }

    #[test]
    fn options_empty_for_slider() {
        assert!(budget_slider().options().is_empty());
    }

    #[test]
    fn peak_multiplier_ignores_protective_options() {
        let q = Question::new(
            "controls",
            "Controls",
            "",
            2.0,
            QuestionKind::MultiSelect {
                options: vec![
                    AnswerOption::new("mfa", "MFA", -0.4, ImpactTier::Low),
                    AnswerOption::new("minimal", "Minimal", 1.5, ImpactTier::Critical),
                ],
            },
        );
        assert!((q.peak_multiplier() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_operator_deserializes_to_catch_all() {
        let json = r#"{"questionId":"org-profile","operator":"startsWith","value":"ent"}"#;
        let condition: Condition = serde_json::from_str(json).unwrap();
        assert_eq!(condition.operator, Operator::Unknown);
    }

    #[test]
    fn question_kind_is_tagged_by_type() {
        let json = r#"{
            "id": "industry",
            "title": "Industry",
            "description": "Pick one",
            "weight": 1.5,
            "type": "singleSelect",
            "options": [
                {"id": "financial", "label": "Financial", "riskMultiplier": 2.0, "riskImpact": "critical"}
            ],
            "noviceFriendly": true
        }"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert!(q.required);
        assert!(q.novice_friendly);
        assert_eq!(q.options().len(), 1);
        assert!(matches!(q.kind, QuestionKind::SingleSelect { .. }));
    }
}
