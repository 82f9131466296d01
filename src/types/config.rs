use crate::error::AssessError;
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_TOOL_NAME: &str = "SustainAssess";
pub const DEFAULT_PROJECT_NAME: &str = "Projeto";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    pub export: Option<ExportConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    pub tool_name: Option<String>,
    pub default_project_name: Option<String>,
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSettings {
    pub tool_name: String,
    pub default_project_name: String,
    pub output_dir: Option<PathBuf>,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            tool_name: DEFAULT_TOOL_NAME.to_string(),
            default_project_name: DEFAULT_PROJECT_NAME.to_string(),
            output_dir: None,
        }
    }
}

impl AppConfig {
    pub fn export_settings(&self) -> ExportSettings {
        let defaults = ExportSettings::default();
        match &self.export {
            Some(export) => ExportSettings {
                tool_name: export.tool_name.clone().unwrap_or(defaults.tool_name),
                default_project_name: export
                    .default_project_name
                    .clone()
                    .unwrap_or(defaults.default_project_name),
                output_dir: export.output_dir.clone(),
            },
            None => defaults,
        }
    }

    pub fn log_level(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|logging| logging.level.as_deref())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn validate(&self) -> Result<(), AssessError> {
        let settings = self.export_settings();
        if settings.tool_name.trim().is_empty() {
            return Err(AssessError::ConfigParse(
                "export.tool_name must not be empty".to_string(),
            ));
        }
        if settings.default_project_name.trim().is_empty() {
            return Err(AssessError::ConfigParse(
                "export.default_project_name must not be empty".to_string(),
            ));
        }
        if !matches!(
            self.log_level(),
            "error" | "warn" | "info" | "debug" | "trace"
        ) {
            return Err(AssessError::ConfigParse(format!(
                "unsupported logging.level: {}",
                self.log_level()
            )));
        }
        Ok(())
    }
}
