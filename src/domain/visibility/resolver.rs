//! Visibility Resolver - which questions apply given the answers so far.

use std::collections::HashSet;

use crate::domain::assessment::{Proficiency, Response, ResponseSet};
use crate::domain::catalog::{ids, Catalog, Condition, ConditionValue, Operator, Question};

/// Pure resolver over a catalog and a response set.
pub struct VisibilityResolver;

impl VisibilityResolver {
    /// Visible questions in catalog order.
    pub fn visible_questions<'a>(catalog: &'a Catalog, responses: &ResponseSet) -> Vec<&'a Question> {
        let proficiency = Proficiency::from_responses(responses);
        catalog
            .questions()
            .iter()
            .filter(|q| Self::is_visible(q, responses, proficiency))
            .collect()
    }

    /// Ids of the visible questions.
    pub fn visible_ids<'a>(catalog: &'a Catalog, responses: &ResponseSet) -> HashSet<&'a str> {
        Self::visible_questions(catalog, responses)
            .into_iter()
            .map(|q| q.id.as_str())
            .collect()
    }

    /// Drops responses whose question is hidden or unknown.
    ///
    /// Repeats until stable, since a dropped answer can itself be the
    /// trigger that kept another question visible.
    pub fn retain_visible(catalog: &Catalog, responses: &ResponseSet) -> ResponseSet {
        let mut current = responses.clone();
        loop {
            let visible = Self::visible_ids(catalog, &current);
            let next: ResponseSet = current
                .iter()
                .filter(|r| visible.contains(r.question_id.as_str()))
                .cloned()
                .collect();
            if next.len() == current.len() {
                return next;
            }
            current = next;
        }
    }

    /// Applies the bootstrap, audience and rule gates to one question.
    pub fn is_visible(question: &Question, responses: &ResponseSet, proficiency: Proficiency) -> bool {
        if ids::BOOTSTRAP_QUESTIONS.contains(&question.id.as_str()) {
            return true;
        }

        match proficiency {
            Proficiency::Novice => {
                if question.expert_only {
                    return false;
                }
                if !question.novice_friendly && !question.has_show_if() {
                    return false;
                }
            }
            Proficiency::Intermediate => {
                if question.expert_only {
                    return false;
                }
            }
            Proficiency::Expert => {}
        }

        if let Some(hide_if) = &question.visibility.hide_if {
            if hide_if.iter().any(|c| Self::evaluate(c, responses)) {
                return false;
            }
        }

        match &question.visibility.show_if {
            Some(show_if) => show_if.iter().any(|c| Self::evaluate(c, responses)),
            None => true,
        }
    }

    /// Evaluates one condition. Unanswered targets and unknown operators are false.
    pub fn evaluate(condition: &Condition, responses: &ResponseSet) -> bool {
        let Some(response) = responses
            .get(&condition.question_id)
            .filter(|r| has_answer_data(r))
        else {
            return false;
        };

        match (condition.operator, &condition.value) {
            (Operator::Includes, ConditionValue::Text(option)) => response.includes(option),
            (Operator::Excludes, ConditionValue::Text(option)) => !response.includes(option),
            (Operator::Includes | Operator::Excludes, ConditionValue::Number(_)) => false,
            (Operator::Equals, value) => {
                let selection_matches = match value {
                    ConditionValue::Text(option) => response.first_selection() == Some(option.as_str()),
                    ConditionValue::Number(_) => false,
                };
                selection_matches
                    || matches!(
                        (response.slider_value, value.as_number()),
                        (Some(actual), Some(expected)) if actual == expected
                    )
            }
            (Operator::GreaterThan, value) => value
                .as_number()
                .is_some_and(|threshold| response.slider_value.unwrap_or(0.0) > threshold),
            (Operator::LessThan, value) => value
                .as_number()
                .is_some_and(|threshold| response.slider_value.unwrap_or(0.0) < threshold),
            (Operator::Unknown, _) => false,
        }
    }
}

fn has_answer_data(response: &Response) -> bool {
    !response.selected_options.is_empty()
        || response.slider_value.is_some()
        || response.text_value.is_some()
}
