use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Lowest graded score; `0` is the N/A sentinel.
pub const MIN_GRADED_SCORE: u8 = 1;
/// Highest score on the Likert scale.
pub const MAX_SCORE: u8 = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub score: u8,
    pub can_improve: bool,
    pub action: String,
    pub date: String,
    pub owner: String,
}

impl Answer {
    pub fn is_answered(&self) -> bool {
        self.score > 0
    }

    /// Improvement flow only exists for graded scores below the maximum.
    pub fn improvement_applicable(&self) -> bool {
        (MIN_GRADED_SCORE..MAX_SCORE).contains(&self.score)
    }

    pub fn has_planned_action(&self) -> bool {
        self.improvement_applicable() && self.can_improve && !self.action.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImprovementField {
    CanImprove(bool),
    Action(String),
    Date(String),
    Owner(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssessmentState {
    answers: BTreeMap<String, Answer>,
}

impl AssessmentState {
    pub fn get(&self, question_id: &str) -> Option<&Answer> {
        self.answers.get(question_id)
    }

    /// Stored answer, or the zero-valued default when the question was never touched.
    pub fn answer(&self, question_id: &str) -> Answer {
        self.answers.get(question_id).cloned().unwrap_or_default()
    }

    pub fn set_score(&mut self, question_id: &str, score: u8) {
        self.answers
            .entry(question_id.to_string())
            .or_default()
            .score = score;
    }

    pub fn set_improvement(&mut self, question_id: &str, field: ImprovementField) {
        let answer = self.answers.entry(question_id.to_string()).or_default();
        match field {
            ImprovementField::CanImprove(value) => answer.can_improve = value,
            ImprovementField::Action(value) => answer.action = value,
            ImprovementField::Date(value) => answer.date = value,
            ImprovementField::Owner(value) => answer.owner = value,
        }
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectInfo {
    pub name: String,
    pub client: String,
    pub sector: String,
    pub country: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_answer_defaults_to_unanswered() {
        let state = AssessmentState::default();
        let answer = state.answer("q1");
        assert_eq!(answer, Answer::default());
        assert!(!answer.is_answered());
        assert!(state.get("q1").is_none());
    }

    #[test]
    fn set_score_keeps_existing_improvement_fields() {
        let mut state = AssessmentState::default();
        state.set_improvement("q1", ImprovementField::Action("Hire auditor".to_string()));
        state.set_improvement("q1", ImprovementField::CanImprove(true));
        state.set_score("q1", 3);

        let answer = state.answer("q1");
        assert_eq!(answer.score, 3);
        assert!(answer.can_improve);
        assert_eq!(answer.action, "Hire auditor");
    }

    #[test]
    fn set_improvement_on_fresh_question_starts_at_score_zero() {
        let mut state = AssessmentState::default();
        state.set_improvement("q7", ImprovementField::Owner("Ana".to_string()));

        let answer = state.answer("q7");
        assert_eq!(answer.score, 0);
        assert_eq!(answer.owner, "Ana");
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn planned_action_requires_graded_score_below_max() {
        let mut answer = Answer {
            score: 3,
            can_improve: true,
            action: "Publish MRV plan".to_string(),
            ..Answer::default()
        };
        assert!(answer.has_planned_action());

        answer.score = 5;
        assert!(!answer.has_planned_action());
        answer.score = 0;
        assert!(!answer.has_planned_action());

        answer.score = 2;
        answer.action.clear();
        assert!(!answer.has_planned_action());
    }
}
