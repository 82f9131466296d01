use crate::scoring::{self, tiers};
use crate::store::{Assessment, ProgramView};
use crate::types::answer::Answer;
use crate::types::report::{
    ActionItem, CategoryLine, CategorySection, Dashboard, PrintReport, ProgramDashboard,
    ProgramSection, QuestionRow,
};
use crate::types::schema::Program;
use chrono::NaiveDate;

pub fn dashboard(assessment: &Assessment) -> Dashboard {
    Dashboard {
        programs: Program::ALL
            .iter()
            .map(|program| program_dashboard(assessment.program(*program)))
            .collect(),
    }
}

fn program_dashboard(view: ProgramView<'_>) -> ProgramDashboard {
    let scores = view.scores();
    let categories = view
        .categories
        .iter()
        .map(|category| {
            let average = scores.category_score(category.id);
            let percentage = scoring::category_percentage(average);
            CategoryLine {
                id: category.id,
                name: category.name,
                weight_percent: category.weight_percent(),
                average,
                percentage,
                progress: tiers::progress_color(percentage),
            }
        })
        .collect();
    let answered = view
        .categories
        .iter()
        .flat_map(|category| category.questions)
        .filter(|question| view.state.answer(question.id).is_answered())
        .count();

    ProgramDashboard {
        program: view.program,
        total_score: scores.total_score,
        percentage: scores.percentage,
        classification: scores.classification,
        color: scores.color,
        badge: tiers::badge_color(scores.percentage),
        progress: tiers::progress_color(scores.percentage),
        answered,
        questions: view.program.question_count(),
        categories,
    }
}

/// Planned improvements across MAF then IKI, in schema order.
pub fn action_plan(assessment: &Assessment) -> Vec<ActionItem> {
    collect_actions(assessment, Answer::has_planned_action)
}

/// Every answer carrying an action, whatever its score or improvement flag.
pub fn recorded_actions(assessment: &Assessment) -> Vec<ActionItem> {
    collect_actions(assessment, |answer| !answer.action.is_empty())
}

fn collect_actions<F>(assessment: &Assessment, keep: F) -> Vec<ActionItem>
where
    F: Fn(&Answer) -> bool,
{
    let mut items = Vec::new();
    for program in Program::ALL {
        let view = assessment.program(program);
        for category in view.categories {
            for question in category.questions {
                let Some(answer) = view.state.get(question.id) else {
                    continue;
                };
                if !keep(answer) {
                    continue;
                }
                items.push(ActionItem {
                    program,
                    category: category.name,
                    question_id: question.id,
                    question: question.text,
                    action: answer.action.clone(),
                    date: answer.date.clone(),
                    owner: answer.owner.clone(),
                });
            }
        }
    }
    items
}

pub fn print_report(assessment: &Assessment, generated_on: NaiveDate) -> PrintReport {
    let programs = Program::ALL
        .iter()
        .map(|program| program_section(assessment.program(*program)))
        .collect();

    PrintReport {
        generated_on,
        project: assessment.project.clone(),
        programs,
        actions: recorded_actions(assessment),
    }
}

fn program_section(view: ProgramView<'_>) -> ProgramSection {
    let scores = view.scores();
    let categories = view
        .categories
        .iter()
        .map(|category| CategorySection {
            name: category.name,
            weight_percent: category.weight_percent(),
            average: scores.category_score(category.id),
            rows: category
                .questions
                .iter()
                .map(|question| {
                    let answer = view.state.answer(question.id);
                    QuestionRow {
                        id: question.id,
                        text: question.text,
                        score: answer.score,
                        action: answer.action,
                    }
                })
                .collect(),
        })
        .collect();

    ProgramSection {
        program: view.program,
        percentage: scores.percentage,
        classification: scores.classification,
        categories,
    }
}
