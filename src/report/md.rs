use crate::types::report::{ActionItem, Dashboard, PrintReport};
use crate::types::schema::Program;

pub const REPORT_TITLE: &str = "Relatório de Elegibilidade";
pub const REPORT_SUBTITLE: &str = "SustainAssess - Consultoria de Sustentabilidade";
pub const DISCLAIMER: &str = "Este documento é uma avaliação preliminar automatizada. Recomenda-se revisão técnica antes da submissão oficial aos editais.";
const NO_ACTIONS: &str = "Nenhuma providência registrada. Identifique oportunidades de melhoria nas avaliações.";

pub fn dashboard_to_markdown(dashboard: &Dashboard) -> String {
    let mut output = String::new();
    output.push_str("# Dashboard\n\n");

    for program in &dashboard.programs {
        output.push_str(&format!("## {} Score\n\n", program.program));
        output.push_str(&format!(
            "**{:.1}%** / 100 - {} ({} de {} respondidas)\n\n",
            program.percentage, program.classification, program.answered, program.questions
        ));
        output.push_str(&format!(
            "- badge: `{}`\n- progress: `{}`\n\n",
            program.badge, program.progress
        ));
        output.push_str("| Categoria | Peso | Média | % | Progresso |\n");
        output.push_str("|---|---:|---:|---:|---|\n");
        for category in &program.categories {
            output.push_str(&format!(
                "| {} | {}% | {:.1} | {:.1}% | `{}` |\n",
                cell(category.name),
                percent(category.weight_percent),
                category.average,
                category.percentage,
                category.progress
            ));
        }
        output.push('\n');
    }

    output
}

pub fn action_plan_to_markdown(actions: &[ActionItem]) -> String {
    let mut output = String::new();
    output.push_str("# Plano de Ação Consolidado\n\n");
    push_action_table(&mut output, actions, "-");
    output
}

pub fn report_to_markdown(report: &PrintReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("# {REPORT_TITLE}\n\n"));
    output.push_str(&format!("**{REPORT_SUBTITLE}**\n\n"));
    output.push_str(&format!(
        "Data: {}\n\n",
        report.generated_on.format("%d/%m/%Y")
    ));

    output.push_str("## Informações do Projeto\n\n");
    let project = &report.project;
    for (label, value) in [
        ("Projeto", &project.name),
        ("Cliente", &project.client),
        ("Setor", &project.sector),
        ("País", &project.country),
    ] {
        output.push_str(&format!("- **{label}:** {}\n", or_placeholder(value, "---")));
    }
    output.push('\n');

    for section in &report.programs {
        output.push_str(&format!(
            "- **Status {}:** {:.1}% - {}\n",
            section.program, section.percentage, section.classification
        ));
    }
    output.push('\n');

    for (index, section) in report.programs.iter().enumerate() {
        output.push_str(&format!(
            "## {}. Detalhamento {}\n\n",
            index + 1,
            section.program
        ));
        output.push_str("| Critério / Pergunta | Nota | Melhoria Identificada |\n");
        output.push_str("|---|:---:|---|\n");
        for category in &section.categories {
            output.push_str(&format!(
                "| **{} (Peso: {}%)** | | |\n",
                cell(category.name),
                percent(category.weight_percent)
            ));
            for row in &category.rows {
                output.push_str(&format!(
                    "| {} | {} | {} |\n",
                    cell(row.text),
                    row.score,
                    cell(or_placeholder(&row.action, "---"))
                ));
            }
        }
        output.push('\n');
    }

    output.push_str(&format!(
        "## {}. Plano de Ação Consolidado\n\n",
        report.programs.len() + 1
    ));
    push_action_table(&mut output, &report.actions, "---");

    output.push_str("---\n\n");
    output.push_str(DISCLAIMER);
    output.push('\n');
    output
}

pub fn schema_to_markdown(program: Program) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "# {} ({} categorias, {} perguntas)\n\n",
        program,
        program.categories().len(),
        program.question_count()
    ));
    for category in program.categories() {
        output.push_str(&format!(
            "## {} - {} (Peso: {}%)\n\n",
            category.id,
            category.name,
            percent(category.weight_percent())
        ));
        for question in category.questions {
            output.push_str(&format!("- `{}` {}\n", question.id, question.text));
        }
        output.push('\n');
    }
    output
}

fn push_action_table(output: &mut String, actions: &[ActionItem], empty: &str) {
    if actions.is_empty() {
        output.push_str(NO_ACTIONS);
        output.push_str("\n\n");
        return;
    }
    output.push_str("| Edital | Categoria / Pergunta | Providência | Prazo | Responsável |\n");
    output.push_str("|---|---|---|---|---|\n");
    for item in actions {
        output.push_str(&format!(
            "| {} | {} / {} | {} | {} | {} |\n",
            item.program,
            cell(item.category),
            cell(item.question),
            cell(&item.action),
            cell(or_placeholder(&item.date, empty)),
            cell(or_placeholder(&item.owner, empty))
        ));
    }
    output.push('\n');
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

/// Keeps free text from breaking the table layout.
fn cell(value: &str) -> String {
    value.replace('|', "\\|").replace(['\r', '\n'], " ")
}

/// `15.000000000000002` -> `15`, `12.5` -> `12.5`.
fn percent(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}
