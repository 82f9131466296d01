pub mod json;
pub mod md;
pub mod views;

use crate::error::AssessError;
use crate::types::report::{ActionItem, Dashboard, PrintReport};

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render_dashboard(dashboard: &Dashboard, format: OutputFormat) -> Result<String, AssessError> {
    match format {
        OutputFormat::Json => json::to_json(dashboard).map_err(AssessError::Json),
        OutputFormat::Md => Ok(md::dashboard_to_markdown(dashboard)),
    }
}

pub fn render_action_plan(
    actions: &[ActionItem],
    format: OutputFormat,
) -> Result<String, AssessError> {
    match format {
        OutputFormat::Json => json::to_json(&actions).map_err(AssessError::Json),
        OutputFormat::Md => Ok(md::action_plan_to_markdown(actions)),
    }
}

pub fn render_report(report: &PrintReport, format: OutputFormat) -> Result<String, AssessError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(AssessError::Json),
        OutputFormat::Md => Ok(md::report_to_markdown(report)),
    }
}
