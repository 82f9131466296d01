pub mod spreadsheet;

use crate::error::{AssessError, Result};
use crate::store::Assessment;
use crate::types::answer::ProjectInfo;
use crate::types::config::ExportSettings;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// `<tool>_<project or default>.csv`, with path separators neutralized.
pub fn export_file_name(project: &ProjectInfo, settings: &ExportSettings) -> String {
    let name = if project.name.is_empty() {
        settings.default_project_name.as_str()
    } else {
        project.name.as_str()
    };
    let name = name.replace(['/', '\\'], "_");
    format!("{}_{}.csv", settings.tool_name, name)
}

pub fn export_csv(assessment: &Assessment, settings: &ExportSettings, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(AssessError::Io)?;
    let out_path = dir.join(export_file_name(&assessment.project, settings));
    let file = File::create(&out_path).map_err(AssessError::Io)?;
    spreadsheet::write_csv(assessment, BufWriter::new(file))?;
    tracing::info!(path = %out_path.display(), "exported csv");
    Ok(out_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::parse_assessment;
    use tempfile::TempDir;

    #[test]
    fn file_name_falls_back_to_default_project() {
        let settings = ExportSettings::default();
        assert_eq!(
            export_file_name(&ProjectInfo::default(), &settings),
            "SustainAssess_Projeto.csv"
        );
    }

    #[test]
    fn file_name_uses_project_and_configured_tool() {
        let settings = ExportSettings {
            tool_name: "Elegibilidade".to_string(),
            ..ExportSettings::default()
        };
        let project = ProjectInfo {
            name: "Solar/Bahia".to_string(),
            ..ProjectInfo::default()
        };
        assert_eq!(
            export_file_name(&project, &settings),
            "Elegibilidade_Solar_Bahia.csv"
        );
    }

    #[test]
    fn export_csv_writes_into_directory() {
        let dir = TempDir::new().expect("temp dir should be created");
        let assessment = parse_assessment("[project]\nname = \"Eolica\"\n\n[maf.q1]\nscore = 2\n")
            .expect("assessment should parse");

        let path = export_csv(&assessment, &ExportSettings::default(), &dir.path().join("out"))
            .expect("export should succeed");
        assert_eq!(path, dir.path().join("out").join("SustainAssess_Eolica.csv"));

        let content = fs::read_to_string(&path).expect("export should be readable");
        assert!(content.starts_with("Informações do Projeto\nNome,Eolica\n"));
    }
}
