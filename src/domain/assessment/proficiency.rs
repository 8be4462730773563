//! Self-declared expertise level.

use serde::{Deserialize, Serialize};

use super::ResponseSet;
use crate::domain::catalog::ids;

/// How much cyber security knowledge the respondent claims.
///
/// Never stored on its own; always read back from the
/// `user-proficiency` answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    Novice,
    #[default]
    Intermediate,
    Expert,
}

impl Proficiency {
    /// Resolves the level from responses, defaulting to intermediate.
    pub fn from_responses(responses: &ResponseSet) -> Self {
        match responses.first_selection(ids::USER_PROFICIENCY) {
            Some("novice") => Proficiency::Novice,
            Some("expert") => Proficiency::Expert,
            _ => Proficiency::Intermediate,
        }
    }

    /// Scale applied to every question's score and maximum in full scoring.
    pub fn score_multiplier(&self) -> f64 {
        match self {
            Proficiency::Novice => 0.8,
            Proficiency::Intermediate => 1.0,
            Proficiency::Expert => 1.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::Response;

    #[test]
    fn defaults_to_intermediate_when_unanswered() {
        assert_eq!(
            Proficiency::from_responses(&ResponseSet::new()),
            Proficiency::Intermediate
        );
    }

    #[test]
    fn reads_declared_level() {
        let mut responses = ResponseSet::new();
        responses.upsert(Response::selected(ids::USER_PROFICIENCY, &["expert"]));
        assert_eq!(Proficiency::from_responses(&responses), Proficiency::Expert);

        responses.upsert(Response::selected(ids::USER_PROFICIENCY, &["novice"]));
        assert_eq!(Proficiency::from_responses(&responses), Proficiency::Novice);
    }

    #[test]
    fn unrecognised_level_falls_back() {
        let mut responses = ResponseSet::new();
        responses.upsert(Response::selected(ids::USER_PROFICIENCY, &["wizard"]));
        assert_eq!(
            Proficiency::from_responses(&responses),
            Proficiency::Intermediate
        );
    }

    #[test]
    fn multipliers() {
        assert_eq!(Proficiency::Novice.score_multiplier(), 0.8);
        assert_eq!(Proficiency::Intermediate.score_multiplier(), 1.0);
        assert_eq!(Proficiency::Expert.score_multiplier(), 1.2);
    }
}
