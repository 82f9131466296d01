mod cli;
mod config;
mod error;
mod export;
mod report;
mod schema;
mod scoring;
mod store;
mod telemetry;
mod types;

use crate::error::AssessError;
use crate::types::schema::Program;
use chrono::Utc;
use clap::Parser;
use std::path::{Path, PathBuf};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

impl From<cli::ProgramArg> for Program {
    fn from(arg: cli::ProgramArg) -> Self {
        match arg {
            cli::ProgramArg::Maf => Program::Maf,
            cli::ProgramArg::Iki => Program::Iki,
        }
    }
}

impl From<cli::ReportFormat> for report::OutputFormat {
    fn from(format: cli::ReportFormat) -> Self {
        match format {
            cli::ReportFormat::Json => report::OutputFormat::Json,
            cli::ReportFormat::Md => report::OutputFormat::Md,
        }
    }
}

/// Directory whose config layers apply: the assessment's own directory, or cwd.
fn config_root(command: &cli::Commands) -> PathBuf {
    let file = match command {
        cli::Commands::Score(cmd) => Some(&cmd.file),
        cli::Commands::Report(cmd) => Some(&cmd.file),
        cli::Commands::Plan(cmd) => Some(&cmd.file),
        cli::Commands::Export(cmd) => Some(&cmd.file),
        cli::Commands::Schema(_) | cli::Commands::Validate => None,
    };
    file.and_then(|path| path.parent())
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn run() -> Result<i32, AssessError> {
    let cli = cli::Cli::parse();
    let root = config_root(&cli.command);
    let loaded = config::load_config(&root)?;
    telemetry::init(&telemetry::level_for(
        cli.verbose,
        cli.quiet,
        loaded.log_level(),
    ))?;
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), root = %root.display(), "starting");

    let schema_issues = schema::validate_all();
    for issue in &schema_issues {
        tracing::warn!(issue = %issue.id, "{}", issue.body);
    }

    match cli.command {
        cli::Commands::Score(cmd) => {
            let assessment = store::load_assessment(&cmd.file)?;
            let dashboard = report::views::dashboard(&assessment);
            println!("{}", report::render_dashboard(&dashboard, cmd.format.into())?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Report(cmd) => {
            let assessment = store::load_assessment(&cmd.file)?;
            let print = report::views::print_report(&assessment, Utc::now().date_naive());
            let rendered = report::render_report(&print, cmd.format.into())?;
            match cmd.output {
                Some(path) => {
                    std::fs::write(&path, rendered).map_err(AssessError::Io)?;
                    tracing::info!(path = %path.display(), "report written");
                    println!("report file: {}", path.display());
                }
                None => println!("{rendered}"),
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Plan(cmd) => {
            let assessment = store::load_assessment(&cmd.file)?;
            let actions = report::views::action_plan(&assessment);
            println!("{}", report::render_action_plan(&actions, cmd.format.into())?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Export(cmd) => {
            let assessment = store::load_assessment(&cmd.file)?;
            let settings = loaded.export_settings();
            let dir = cmd
                .out_dir
                .or_else(|| settings.output_dir.as_ref().map(|dir| root.join(dir)))
                .unwrap_or_else(|| root.clone());
            let path = export::export_csv(&assessment, &settings, &dir)?;
            println!("csv file: {}", path.display());
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Schema(cmd) => {
            let programs = match cmd.program {
                Some(program) => vec![Program::from(program)],
                None => Program::ALL.to_vec(),
            };
            for program in programs {
                print!("{}", report::md::schema_to_markdown(program));
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Validate => {
            if schema_issues.is_empty() {
                println!("validate: no issues");
                return Ok(exit_code::SUCCESS);
            }
            for issue in &schema_issues {
                println!("[BLOCKING] {}: {}", issue.id, issue.body);
            }
            Ok(exit_code::BLOCKING)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
