pub mod tiers;

use crate::types::answer::{AssessmentState, MAX_SCORE};
use crate::types::schema::Category;
use crate::types::scoring::ScoreResult;
use std::collections::BTreeMap;

/// Scores one program's answers against its category set.
///
/// Unanswered questions (missing, or scored `0`) are left out of both the
/// sum and the count of their category, so they never pull an average down.
/// A category with nothing answered averages `0.0`. Scores and weights are
/// trusted as given: nothing is clamped or rejected here.
pub fn calculate_scores(categories: &[Category], answers: &AssessmentState) -> ScoreResult {
    let mut total_score = 0.0;
    let mut category_scores = BTreeMap::new();

    for category in categories {
        let (sum, count) = category
            .questions
            .iter()
            .filter_map(|question| answers.get(question.id))
            .filter(|answer| answer.is_answered())
            .fold((0u32, 0u32), |(sum, count), answer| {
                (sum + u32::from(answer.score), count + 1)
            });

        let average = if count > 0 {
            f64::from(sum) / f64::from(count)
        } else {
            0.0
        };
        category_scores.insert(category.id.to_string(), average);
        total_score += average * category.weight;
    }

    let percentage = total_score / f64::from(MAX_SCORE) * 100.0;
    let band = tiers::band_for(percentage);

    ScoreResult {
        total_score,
        percentage,
        classification: band.classification,
        color: band.color,
        category_scores,
    }
}

/// Category average expressed on the 0..=100 scale used by dashboards.
pub fn category_percentage(average: f64) -> f64 {
    average / f64::from(MAX_SCORE) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::schema::{Program, Question};
    use crate::types::scoring::Classification;

    const SINGLE: &[Category] = &[Category {
        id: "c1",
        name: "Only",
        weight: 1.0,
        questions: &[
            Question {
                id: "q1",
                text: "First?",
            },
            Question {
                id: "q2",
                text: "Second?",
            },
            Question {
                id: "q3",
                text: "Third?",
            },
        ],
    }];

    const SPLIT: &[Category] = &[
        Category {
            id: "a",
            name: "A",
            weight: 0.6,
            questions: &[
                Question {
                    id: "a1",
                    text: "A1?",
                },
                Question {
                    id: "a2",
                    text: "A2?",
                },
            ],
        },
        Category {
            id: "b",
            name: "B",
            weight: 0.4,
            questions: &[Question {
                id: "b1",
                text: "B1?",
            }],
        },
        Category {
            id: "z",
            name: "Zero weight",
            weight: 0.0,
            questions: &[Question {
                id: "z1",
                text: "Z1?",
            }],
        },
    ];

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    fn all_answered_with(categories: &[Category], score: u8) -> AssessmentState {
        let mut state = AssessmentState::default();
        for question in categories.iter().flat_map(|category| category.questions) {
            state.set_score(question.id, score);
        }
        state
    }

    #[test]
    fn unanswered_questions_are_excluded_from_the_average() {
        let mut state = AssessmentState::default();
        state.set_score("q1", 5);
        state.set_score("q2", 3);

        let result = calculate_scores(SINGLE, &state);
        assert_close(result.category_score("c1"), 4.0);
        assert_close(result.total_score, 4.0);
        assert_close(result.percentage, 80.0);
        assert_eq!(result.classification, Classification::Strong);
        assert_eq!(result.color, "#10b981");
    }

    #[test]
    fn explicit_zero_counts_as_not_applicable() {
        let mut state = AssessmentState::default();
        state.set_score("q1", 2);
        state.set_score("q2", 0);
        state.set_score("q3", 0);

        let result = calculate_scores(SINGLE, &state);
        assert_close(result.category_score("c1"), 2.0);
        assert_close(result.percentage, 40.0);
        assert_eq!(result.classification, Classification::Weak);
    }

    #[test]
    fn weighted_total_combines_categories() {
        let mut state = AssessmentState::default();
        state.set_score("a1", 5);
        state.set_score("a2", 3);
        state.set_score("b1", 2);
        state.set_score("z1", 1);

        let result = calculate_scores(SPLIT, &state);
        assert_close(result.category_score("a"), 4.0);
        assert_close(result.category_score("b"), 2.0);
        assert_close(result.category_score("z"), 1.0);
        assert_close(result.total_score, 3.2);
        assert_close(result.percentage, 64.0);
        assert_eq!(result.classification, Classification::Viable);
        assert_eq!(result.color, "#f59e0b");
    }

    #[test]
    fn empty_state_scores_zero_everywhere() {
        for program in Program::ALL {
            let result = calculate_scores(program.categories(), &AssessmentState::default());
            assert_eq!(result.total_score, 0.0);
            assert_eq!(result.percentage, 0.0);
            assert_eq!(result.classification, Classification::Inadequate);
            assert_eq!(result.color, "#ef4444");
            assert_eq!(result.category_scores.len(), program.categories().len());
            assert!(result
                .category_scores
                .values()
                .all(|average| *average == 0.0 && !average.is_nan()));
        }
    }

    #[test]
    fn all_zero_scores_score_zero() {
        let state = all_answered_with(Program::Maf.categories(), 0);
        let result = calculate_scores(Program::Maf.categories(), &state);
        assert_eq!(result.percentage, 0.0);
        assert_eq!(result.classification, Classification::Inadequate);
    }

    #[test]
    fn perfect_answers_reach_one_hundred_percent() {
        for categories in [SINGLE, Program::Maf.categories()] {
            let state = all_answered_with(categories, 5);
            let result = calculate_scores(categories, &state);
            assert_close(result.total_score, 5.0);
            assert_close(result.percentage, 100.0);
            assert_eq!(result.classification, Classification::Strong);
        }
    }

    #[test]
    fn out_of_range_scores_are_used_verbatim() {
        let mut state = AssessmentState::default();
        state.set_score("q1", 10);

        let result = calculate_scores(SINGLE, &state);
        assert_close(result.percentage, 200.0);
        assert_eq!(result.classification, Classification::Strong);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let mut state = AssessmentState::default();
        state.set_score("q1", 4);
        state.set_score("q3", 1);

        let first = calculate_scores(SINGLE, &state);
        let second = calculate_scores(SINGLE, &state);
        assert_eq!(first, second);
        assert_eq!(first.percentage.to_bits(), second.percentage.to_bits());
    }

    #[test]
    fn category_percentage_scales_average() {
        assert_close(category_percentage(4.0), 80.0);
        assert_close(category_percentage(0.0), 0.0);
    }
}
