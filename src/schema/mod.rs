pub mod iki;
pub mod maf;

use crate::types::schema::{Category, Program, Question};
use serde::Serialize;
use std::collections::HashSet;

/// Allowed drift of a program's weight sum from 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

impl Program {
    pub fn categories(self) -> &'static [Category] {
        match self {
            Self::Maf => maf::MAF_CATEGORIES,
            Self::Iki => iki::IKI_CATEGORIES,
        }
    }

    /// Category and question for `question_id`, if it belongs to this program.
    pub fn find_question(
        self,
        question_id: &str,
    ) -> Option<(&'static Category, &'static Question)> {
        self.categories().iter().find_map(|category| {
            category
                .questions
                .iter()
                .find(|question| question.id == question_id)
                .map(|question| (category, question))
        })
    }

    pub fn question_count(self) -> usize {
        self.categories()
            .iter()
            .map(|category| category.questions.len())
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaIssue {
    pub id: String,
    pub program: Option<Program>,
    pub body: String,
}

impl SchemaIssue {
    fn new(id: &str, program: Option<Program>, body: String) -> Self {
        Self {
            id: id.to_string(),
            program,
            body,
        }
    }
}

pub fn validate_categories(program: Program, categories: &[Category]) -> Vec<SchemaIssue> {
    let mut issues = Vec::new();

    if categories.is_empty() {
        issues.push(SchemaIssue::new(
            "schema.empty",
            Some(program),
            format!("{program} has no categories"),
        ));
        return issues;
    }

    for category in categories {
        if category.weight < 0.0 || category.weight.is_nan() {
            issues.push(SchemaIssue::new(
                "schema.negative_weight",
                Some(program),
                format!(
                    "category {} has invalid weight {}",
                    category.id, category.weight
                ),
            ));
        }
        if category.questions.is_empty() {
            issues.push(SchemaIssue::new(
                "schema.empty_category",
                Some(program),
                format!("category {} has no questions", category.id),
            ));
        }
    }

    let weight_sum: f64 = categories.iter().map(|category| category.weight).sum();
    if (weight_sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        issues.push(SchemaIssue::new(
            "schema.weight_sum",
            Some(program),
            format!("{program} category weights must sum to 1.0 (found {weight_sum:.3})"),
        ));
    }

    let mut category_ids = HashSet::new();
    let mut question_ids = HashSet::new();
    for category in categories {
        if !category_ids.insert(category.id) {
            issues.push(SchemaIssue::new(
                "schema.duplicate_category",
                Some(program),
                format!("duplicate category id: {}", category.id),
            ));
        }
        for question in category.questions {
            if !question_ids.insert(question.id) {
                issues.push(SchemaIssue::new(
                    "schema.duplicate_question",
                    Some(program),
                    format!("duplicate question id: {}", question.id),
                ));
            }
        }
    }

    issues
}

/// Validates both built-in programs plus identifiers shared between them.
pub fn validate_all() -> Vec<SchemaIssue> {
    let mut issues = Program::ALL
        .iter()
        .flat_map(|program| validate_categories(*program, program.categories()))
        .collect::<Vec<_>>();

    let maf_ids = question_ids(Program::Maf.categories());
    let mut shared = question_ids(Program::Iki.categories())
        .intersection(&maf_ids)
        .copied()
        .collect::<Vec<_>>();
    shared.sort_unstable();
    for id in shared {
        issues.push(SchemaIssue::new(
            "schema.shared_question",
            None,
            format!("question id {id} appears in both MAF and IKI"),
        ));
    }

    issues
}

fn question_ids(categories: &[Category]) -> HashSet<&'static str> {
    categories
        .iter()
        .flat_map(|category| category.questions.iter().map(|question| question.id))
        .collect()
}
