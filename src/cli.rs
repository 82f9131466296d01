use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sustainassess",
    version,
    about = "MAF and IKI eligibility self-assessment scoring CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score both programs and show the dashboard
    Score(ScoreCommand),
    /// Render the printable eligibility report
    Report(ReportCommand),
    /// List the consolidated action plan
    Plan(PlanCommand),
    /// Export answers and results to a CSV spreadsheet
    Export(ExportCommand),
    /// Print the question catalog
    Schema(SchemaCommand),
    /// Check the built-in catalogs for configuration defects
    Validate,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ProgramArg {
    Maf,
    Iki,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Assessment file (TOML)
    pub file: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct ReportCommand {
    pub file: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Write the report here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct PlanCommand {
    pub file: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct ExportCommand {
    pub file: PathBuf,
    /// Directory for the CSV; defaults to export.output_dir, then the assessment's directory
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

#[derive(Args)]
pub struct SchemaCommand {
    #[arg(long, value_enum)]
    pub program: Option<ProgramArg>,
}
