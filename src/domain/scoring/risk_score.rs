//! Full risk score computed for the results report.

use serde::{Deserialize, Serialize};

use super::contribution::{contribution, has_serious_incident};
use crate::domain::assessment::{Proficiency, ResponseSet};
use crate::domain::catalog::{ids, Catalog};
use crate::domain::foundation::Percentage;
use crate::domain::visibility::VisibilityResolver;

/// Share of the overall maximum each breakdown category is normalised against.
const CATEGORY_SHARE: f64 = 0.25;

/// Maturity answers at the bottom of the scale.
const LOW_MATURITY: [&str; 2] = ["ad-hoc", "basic"];

/// Maturity answers at the top of the scale.
const HIGH_MATURITY: [&str; 2] = ["advanced", "optimized"];

/// Overall band for a risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskCategory {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskCategory {
    pub fn from_score(score: Percentage) -> Self {
        match score.value() {
            0..=25 => RiskCategory::Low,
            26..=50 => RiskCategory::Medium,
            51..=75 => RiskCategory::High,
            _ => RiskCategory::Critical,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskCategory::Low => "Low",
            RiskCategory::Medium => "Medium",
            RiskCategory::High => "High",
            RiskCategory::Critical => "Critical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTrend {
    Improving,
    Stable,
    Worsening,
}

/// Breakdown bucket a question's score is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakdownCategory {
    Technical,
    Operational,
    Compliance,
    Financial,
}

impl BreakdownCategory {
    /// Fixed question-to-bucket mapping; unmapped questions only feed the overall score.
    pub fn for_question(question_id: &str) -> Option<Self> {
        match question_id {
            ids::CYBER_MATURITY
            | ids::THREAT_PRIORITIES
            | ids::ENTERPRISE_COMPLEXITY
            | ids::CURRENT_SECURITY_CONTROLS
            | ids::INFRASTRUCTURE_COMPLEXITY
            | ids::SECURITY_INCIDENTS => Some(Self::Technical),
            ids::ORG_PROFILE
            | ids::DELIVERY_PREFERENCES
            | ids::STARTUP_PRIORITIES
            | ids::DATA_SENSITIVITY => Some(Self::Operational),
            ids::COMPLIANCE_NEEDS => Some(Self::Compliance),
            ids::BUDGET_FLEXIBILITY | ids::URGENCY_TIMELINE => Some(Self::Financial),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RiskBreakdown {
    pub technical: Percentage,
    pub operational: Percentage,
    pub compliance: Percentage,
    pub financial: Percentage,
}

/// The complete score. Recomputed wholesale on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskScore {
    pub overall: Percentage,
    pub category: RiskCategory,
    pub breakdown: RiskBreakdown,
    pub trend: RiskTrend,
    pub confidence: Percentage,
}

#[derive(Default)]
struct Totals {
    technical: f64,
    operational: f64,
    compliance: f64,
    financial: f64,
}

impl Totals {
    fn add(&mut self, category: BreakdownCategory, score: f64) {
        match category {
            BreakdownCategory::Technical => self.technical += score,
            BreakdownCategory::Operational => self.operational += score,
            BreakdownCategory::Compliance => self.compliance += score,
            BreakdownCategory::Financial => self.financial += score,
        }
    }
}

/// Full scorer: proficiency scaling, controls bonus, breakdown, trend and confidence.
pub struct RiskScorer;

impl RiskScorer {
    pub fn calculate(catalog: &Catalog, responses: &ResponseSet) -> RiskScore {
        let proficiency = Proficiency::from_responses(responses);
        let factor = proficiency.score_multiplier();
        let visible = VisibilityResolver::visible_questions(catalog, responses);

        let mut total = 0.0;
        let mut max = 0.0;
        let mut controls_bonus = 0.0;
        let mut answered = 0usize;
        let mut totals = Totals::default();

        for question in &visible {
            let Some(response) = responses.get(&question.id) else {
                continue;
            };
            if response.answers(question) {
                answered += 1;
            }
            let Some(c) = contribution(question, response).map(|c| c.scaled(factor)) else {
                continue;
            };

            if question.id == ids::CURRENT_SECURITY_CONTROLS {
                controls_bonus -= c.protective;
            }
            total += c.score;
            max += c.max_score;

            if let Some(category) = BreakdownCategory::for_question(&question.id) {
                totals.add(category, c.score);
            }
        }

        let total = f64::max(total - controls_bonus, 0.0);
        let overall = Percentage::of(total, max);
        let share = max * CATEGORY_SHARE;

        let visible_responses = VisibilityResolver::retain_visible(catalog, responses);

        RiskScore {
            overall,
            category: RiskCategory::from_score(overall),
            breakdown: RiskBreakdown {
                technical: Percentage::of(totals.technical, share),
                operational: Percentage::of(totals.operational, share),
                compliance: Percentage::of(totals.compliance, share),
                financial: Percentage::of(totals.financial, share),
            },
            trend: Self::trend(&visible_responses),
            confidence: Percentage::of(answered as f64, visible.len() as f64),
        }
    }

    /// Worsening is checked before improving.
    fn trend(responses: &ResponseSet) -> RiskTrend {
        let maturity = responses.first_selection(ids::CYBER_MATURITY);
        let low_maturity = maturity.is_some_and(|m| LOW_MATURITY.contains(&m));
        let many_threats = responses.selected(ids::THREAT_PRIORITIES).len() > 3;
        let serious_incident = responses
            .get(ids::SECURITY_INCIDENTS)
            .is_some_and(has_serious_incident);

        if (low_maturity && many_threats) || serious_incident {
            return RiskTrend::Worsening;
        }

        let high_maturity = maturity.is_some_and(|m| HIGH_MATURITY.contains(&m));
        let many_controls = responses.selected(ids::CURRENT_SECURITY_CONTROLS).len() > 6;
        if high_maturity || many_controls {
            return RiskTrend::Improving;
        }

        RiskTrend::Stable
    }
}
