//! Live score shown while the questionnaire is being filled in.

use serde::{Deserialize, Serialize};

use super::contribution::contribution;
use crate::domain::assessment::ResponseSet;
use crate::domain::catalog::{Catalog, ImpactTier};
use crate::domain::foundation::Percentage;
use crate::domain::visibility::VisibilityResolver;

/// Direction suggested by the most recently scored answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiveTrend {
    Up,
    Down,
    Stable,
}

impl LiveTrend {
    fn from_impact(impact: Option<ImpactTier>) -> Self {
        match impact {
            Some(ImpactTier::High | ImpactTier::Critical) => LiveTrend::Up,
            Some(ImpactTier::Low) => LiveTrend::Down,
            Some(ImpactTier::Medium) | None => LiveTrend::Stable,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveScore {
    pub score: Percentage,
    pub impact: ImpactTier,
    pub trend: LiveTrend,
}

/// Lightweight scorer over visible, answered questions.
pub struct LiveScorer;

impl LiveScorer {
    pub fn calculate(catalog: &Catalog, responses: &ResponseSet) -> LiveScore {
        let visible = VisibilityResolver::visible_ids(catalog, responses);

        let mut total = 0.0;
        let mut max = 0.0;
        let mut last_impact = None;
        for response in responses.iter() {
            if !visible.contains(response.question_id.as_str()) {
                continue;
            }
            let Some(question) = catalog.get(&response.question_id) else {
                continue;
            };
            if let Some(c) = contribution(question, response) {
                total += c.score;
                max += c.max_score;
                last_impact = c.impact;
            }
        }

        let score = Percentage::of(f64::max(total, 0.0), max);
        LiveScore {
            score,
            impact: ImpactTier::from_score(score.value()),
            trend: LiveTrend::from_impact(last_impact),
        }
    }
}
