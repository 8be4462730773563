//! Per-question scoring primitive shared by the live and full scorers.

use crate::domain::assessment::Response;
use crate::domain::catalog::{ids, ImpactTier, Question, QuestionKind};

/// Points per unit of multiplier and weight for choice answers.
const CHOICE_POINTS: f64 = 20.0;

/// Full slider scale.
const SLIDER_MAX: f64 = 100.0;

/// Extra weight on the incidents question after a demonstrated compromise.
pub const SERIOUS_INCIDENT_FACTOR: f64 = 1.5;

/// Incident answers that count as a serious past compromise.
pub const SERIOUS_INCIDENTS: [&str; 3] = ["ransomware-attack", "data-breach", "supply-chain-compromise"];

/// What one answered question adds to the running totals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contribution {
    /// Net signed score.
    pub score: f64,
    pub max_score: f64,
    /// Sum of the negative (protective) parts of `score`; zero or below.
    pub protective: f64,
    /// Tier of the anchor or last matching option, if any matched.
    pub impact: Option<ImpactTier>,
}

impl Contribution {
    /// Scales score and maximum alike.
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            score: self.score * factor,
            max_score: self.max_score * factor,
            protective: self.protective * factor,
            impact: self.impact,
        }
    }
}

/// True when any selected incident is in [`SERIOUS_INCIDENTS`].
pub fn has_serious_incident(response: &Response) -> bool {
    SERIOUS_INCIDENTS.iter().any(|id| response.includes(id))
}

/// Scores one response against its question.
///
/// `None` for zero-weight questions, free text, and responses that do not
/// answer the question.
pub fn contribution(question: &Question, response: &Response) -> Option<Contribution> {
    if question.weight <= 0.0 || !response.answers(question) {
        return None;
    }

    let weight = question.weight;
    let result = match &question.kind {
        QuestionKind::Slider { .. } => {
            let value = response.slider_value?.clamp(0.0, SLIDER_MAX);
            Contribution {
                score: (SLIDER_MAX - value) * weight,
                max_score: SLIDER_MAX * weight,
                protective: 0.0,
                impact: question.nearest_anchor(value).map(|a| a.risk_impact),
            }
        }
        QuestionKind::SingleSelect { .. } | QuestionKind::MultiSelect { .. } => {
            let mut score = 0.0;
            let mut protective = 0.0;
            let mut impact = None;
            let mut matched = 0usize;
            for option in response
                .selected_options
                .iter()
                .filter_map(|id| question.find_option(id))
            {
                let points = option.risk_multiplier * weight * CHOICE_POINTS;
                score += points;
                if points < 0.0 {
                    protective += points;
                }
                impact = Some(option.risk_impact);
                matched += 1;
            }
            let max_score = weight * CHOICE_POINTS * question.peak_multiplier() * matched.max(1) as f64;
            Contribution {
                score,
                max_score,
                protective,
                impact,
            }
        }
        QuestionKind::Text => return None,
    };

    if question.id == ids::SECURITY_INCIDENTS && has_serious_incident(response) {
        return Some(Contribution {
            score: result.score * SERIOUS_INCIDENT_FACTOR,
            ..result
        });
    }
    Some(result)
}
