use std::path::PathBuf;

use clap::{Args, Subcommand};
use tally_core::enums::SessionType;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Audit every record in the records directory and write reports.
    Run(RunArgs),
    /// Audit a single record file and print the result.
    Audit(AuditArgs),
    /// Classify filenames against the naming convention.
    Classify(ClassifyArgs),
    /// Print an individual's session calendar, or write it as SVG.
    Calendar(CalendarArgs),
    /// Dump the JSON schema for an output type.
    Schema(SchemaArgs),
    /// Print the resolved configuration.
    Config,
}

/// Arguments for `tally run`.
#[derive(Clone, Debug, Args)]
pub struct RunArgs {
    /// Audit rules JSON (defaults to `paths.rules`).
    #[arg(long)]
    pub rules: Option<PathBuf>,
    /// Directory of record JSON files (defaults to `paths.records`).
    #[arg(long)]
    pub records: Option<PathBuf>,
    /// Output directory (defaults to `paths.output`).
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Skip SVG calendars even when `output.calendars` is on.
    #[arg(long)]
    pub no_calendars: bool,
}

/// Arguments for `tally audit`.
#[derive(Clone, Debug, Args)]
pub struct AuditArgs {
    pub record: PathBuf,
    #[arg(long)]
    pub rules: Option<PathBuf>,
}

/// Arguments for `tally classify`.
#[derive(Clone, Debug, Args)]
pub struct ClassifyArgs {
    #[arg(required = true)]
    pub filenames: Vec<String>,
    /// Session marker the names must carry: gt, it, ft.
    #[arg(long, default_value = "gt")]
    pub session_type: SessionType,
}

/// Arguments for `tally calendar`.
#[derive(Clone, Debug, Args)]
pub struct CalendarArgs {
    pub record: PathBuf,
    #[arg(long)]
    pub rules: Option<PathBuf>,
    /// Write `<identifier>_calendar.svg` into this directory instead of printing.
    #[arg(long)]
    pub svg: Option<PathBuf>,
}

/// Arguments for `tally schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// record, audit_result, deficiency, summary_row, run_report, classification
    pub type_name: String,
}
