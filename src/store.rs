use crate::error::{AssessError, Result};
use crate::scoring;
use crate::types::answer::{AssessmentState, ImprovementField, ProjectInfo, MAX_SCORE};
use crate::types::schema::{Category, Program};
use crate::types::scoring::ScoreResult;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Everything captured for one assessment session.
#[derive(Debug, Clone, Default)]
pub struct Assessment {
    pub project: ProjectInfo,
    maf: AssessmentState,
    iki: AssessmentState,
}

/// A program resolved to its schema and its answers.
#[derive(Debug, Clone, Copy)]
pub struct ProgramView<'a> {
    pub program: Program,
    pub categories: &'static [Category],
    pub state: &'a AssessmentState,
}

impl ProgramView<'_> {
    pub fn scores(&self) -> ScoreResult {
        scoring::calculate_scores(self.categories, self.state)
    }
}

impl Assessment {
    pub fn new(project: ProjectInfo) -> Self {
        Self {
            project,
            ..Self::default()
        }
    }

    pub fn program(&self, program: Program) -> ProgramView<'_> {
        let state = match program {
            Program::Maf => &self.maf,
            Program::Iki => &self.iki,
        };
        ProgramView {
            program,
            categories: program.categories(),
            state,
        }
    }

    pub fn state_mut(&mut self, program: Program) -> &mut AssessmentState {
        match program {
            Program::Maf => &mut self.maf,
            Program::Iki => &mut self.iki,
        }
    }

    /// Records a score after checking the question belongs to `program`
    /// and the value is on the 0..=5 scale.
    pub fn capture_score(&mut self, program: Program, question_id: &str, score: i64) -> Result<()> {
        ensure_question(program, question_id)?;
        let score = u8::try_from(score)
            .ok()
            .filter(|score| *score <= MAX_SCORE)
            .ok_or_else(|| AssessError::ScoreOutOfRange {
                question: question_id.to_string(),
                score,
            })?;
        self.state_mut(program).set_score(question_id, score);
        Ok(())
    }

    pub fn capture_improvement(
        &mut self,
        program: Program,
        question_id: &str,
        field: ImprovementField,
    ) -> Result<()> {
        ensure_question(program, question_id)?;
        self.state_mut(program).set_improvement(question_id, field);
        Ok(())
    }
}

fn ensure_question(program: Program, question_id: &str) -> Result<()> {
    if program.find_question(question_id).is_none() {
        return Err(AssessError::UnknownQuestion {
            program: program.label().to_string(),
            question: question_id.to_string(),
        });
    }
    Ok(())
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct AssessmentFile {
    #[serde(default)]
    project: ProjectInfo,
    #[serde(default)]
    maf: BTreeMap<String, AnswerEntry>,
    #[serde(default)]
    iki: BTreeMap<String, AnswerEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct AnswerEntry {
    score: Option<i64>,
    can_improve: Option<bool>,
    action: Option<String>,
    date: Option<String>,
    owner: Option<String>,
}

pub fn load_assessment(path: &Path) -> Result<Assessment> {
    if !path.exists() {
        return Err(AssessError::AssessmentNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let assessment = parse_assessment(&content)
        .map_err(|e| match e {
            AssessError::Toml(err) => {
                AssessError::AssessmentParse(format!("{}: {}", path.display(), err))
            }
            other => other,
        })?;
    if assessment.maf.is_empty() && assessment.iki.is_empty() {
        tracing::warn!(path = %path.display(), "assessment has no answers");
    }
    tracing::info!(
        path = %path.display(),
        maf_answers = assessment.maf.len(),
        iki_answers = assessment.iki.len(),
        "loaded assessment"
    );
    Ok(assessment)
}

pub fn parse_assessment(content: &str) -> Result<Assessment> {
    let file: AssessmentFile = toml::from_str(content)?;
    let mut assessment = Assessment::new(file.project);

    for (program, entries) in [(Program::Maf, file.maf), (Program::Iki, file.iki)] {
        for (question_id, entry) in entries {
            apply_entry(&mut assessment, program, &question_id, entry)?;
        }
    }

    Ok(assessment)
}

fn apply_entry(
    assessment: &mut Assessment,
    program: Program,
    question_id: &str,
    entry: AnswerEntry,
) -> Result<()> {
    // A table with no score still creates the answer, at score 0.
    assessment.capture_score(program, question_id, entry.score.unwrap_or(0))?;

    let fields = [
        entry.can_improve.map(ImprovementField::CanImprove),
        entry.action.map(ImprovementField::Action),
        entry.date.map(ImprovementField::Date),
        entry.owner.map(ImprovementField::Owner),
    ];
    for field in fields.into_iter().flatten() {
        assessment.capture_improvement(program, question_id, field)?;
    }
    Ok(())
}
