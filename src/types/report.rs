use crate::types::answer::ProjectInfo;
use crate::types::schema::Program;
use crate::types::scoring::Classification;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub programs: Vec<ProgramDashboard>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgramDashboard {
    pub program: Program,
    pub total_score: f64,
    pub percentage: f64,
    pub classification: Classification,
    pub color: &'static str,
    pub badge: &'static str,
    pub progress: &'static str,
    pub answered: usize,
    pub questions: usize,
    pub categories: Vec<CategoryLine>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryLine {
    pub id: &'static str,
    pub name: &'static str,
    pub weight_percent: f64,
    pub average: f64,
    pub percentage: f64,
    pub progress: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionItem {
    pub program: Program,
    pub category: &'static str,
    pub question_id: &'static str,
    pub question: &'static str,
    pub action: String,
    pub date: String,
    pub owner: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PrintReport {
    pub generated_on: NaiveDate,
    pub project: ProjectInfo,
    pub programs: Vec<ProgramSection>,
    pub actions: Vec<ActionItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgramSection {
    pub program: Program,
    pub percentage: f64,
    pub classification: Classification,
    pub categories: Vec<CategorySection>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategorySection {
    pub name: &'static str,
    pub weight_percent: f64,
    pub average: f64,
    pub rows: Vec<QuestionRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionRow {
    pub id: &'static str,
    pub text: &'static str,
    pub score: u8,
    pub action: String,
}
