use std::path::PathBuf;

use anyhow::Context;
use serde::Serialize;
use tally_config::{PathsConfig, TallyConfig};
use tally_core::responses::{RecordFailure, RunReport, SummaryRow};
use tally_report::calendar::{CalendarModel, write_calendar_svg};

use crate::cli::root_commands::RunArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::audit_settings;
use crate::output::output;
use crate::progress::RecordProgress;

/// Records audited per progress tick.
const BATCH: usize = 64;

#[derive(Debug, Serialize)]
pub struct RunOutcome {
    pub output_dir: PathBuf,
    pub files_written: usize,
    pub summary: Vec<SummaryRow>,
    pub failures: Vec<RecordFailure>,
}

/// Handle `tally run`.
pub fn handle(args: &RunArgs, config: &TallyConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let outcome = execute(args, config, flags)?;

    if flags.format == OutputFormat::Table {
        output(&outcome.summary, flags.format)?;
        if !outcome.failures.is_empty() {
            println!();
            output(&outcome.failures, flags.format)?;
        }
        return Ok(());
    }
    output(&outcome, flags.format)
}

fn run_paths(args: &RunArgs, config: &TallyConfig, flags: &GlobalFlags) -> PathsConfig {
    let pick = |arg: &Option<PathBuf>, configured: &PathBuf| {
        arg.clone().unwrap_or_else(|| flags.resolve(configured))
    };
    PathsConfig {
        rules: pick(&args.rules, &config.paths.rules),
        records: pick(&args.records, &config.paths.records),
        output: pick(&args.output, &config.paths.output),
    }
}

/// Load, audit, and write every report for one run.
pub fn execute(
    args: &RunArgs,
    config: &TallyConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<RunOutcome> {
    let paths = run_paths(args, config, flags);
    let settings = audit_settings(config, flags, Some(paths.rules.as_path()))?;

    let loaded = tally_store::load_records(&paths.records).with_context(|| {
        format!("failed to read records from {}", paths.records.display())
    })?;

    let mut report = RunReport::default();
    let mut records = Vec::with_capacity(loaded.len());
    for entry in loaded {
        match entry.record {
            Ok(record) => records.push(record),
            Err(error) => report.failures.push(RecordFailure {
                source: entry.path.display().to_string(),
                error: error.to_string(),
            }),
        }
    }

    let progress = RecordProgress::start(records.len());
    for batch in records.chunks(BATCH) {
        report.merge(tally_engine::audit_all(batch, &settings));
        progress.advance(batch.len());
    }
    progress.finish();

    let mut written = tally_report::write_json_documents(&report.results, &paths.output)?.len();
    tally_report::write_summary_csv(&report.results, &paths.summary_file())?;
    written += 1;
    written += tally_report::write_issue_reports(&report.results, &paths.output)?.len();

    if config.output.calendars && !args.no_calendars {
        let calendar_dir = paths.calendar_dir();
        for result in &report.results {
            let model = CalendarModel::build(
                result,
                &result.all_filenames(),
                config.audit.period_start,
                config.audit.horizon_end,
            );
            write_calendar_svg(&model, &calendar_dir)?;
            written += 1;
        }
    }

    tracing::info!(
        audited = report.results.len(),
        failed = report.failures.len(),
        files = written,
        "audit run complete"
    );

    Ok(RunOutcome {
        summary: report.summary_rows(),
        failures: report.failures,
        output_dir: paths.output,
        files_written: written,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            quiet: true,
            verbose: false,
            config_dir: None,
        }
    }

    fn fixture() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("audit_rules.json"),
            r#"{"group_therapy": {"low-security": 1, "high-security": 3}}"#,
        )
        .unwrap();
        let logs = dir.path().join("raw_logs");
        fs::create_dir(&logs).unwrap();
        fs::write(
            logs.join("avery.json"),
            r#"{"youth": "Avery", "security_level": "low-security", "start_date": "2024-01-01",
                "files": ["Avery GT 2024-01-02.docx", "Avery GT 2024-01-09.docx", "avery notes.docx"]}"#,
        )
        .unwrap();
        fs::write(
            logs.join("bad_date.json"),
            r#"{"youth": "Casey", "security_level": "low-security", "start_date": "01/05/2024", "files": []}"#,
        )
        .unwrap();
        fs::write(logs.join("broken.json"), "{ not json").unwrap();
        dir
    }

    fn config(dir: &TempDir) -> TallyConfig {
        let mut config = TallyConfig::default();
        config.audit.horizon_end = chrono::NaiveDate::from_ymd_opt(2024, 1, 14).unwrap();
        config.paths.rules = dir.path().join("audit_rules.json");
        config.paths.records = dir.path().join("raw_logs");
        config.paths.output = dir.path().join("out");
        config
    }

    fn args(no_calendars: bool) -> RunArgs {
        RunArgs {
            rules: None,
            records: None,
            output: None,
            no_calendars,
        }
    }

    #[test]
    fn run_writes_reports_and_collects_failures() {
        let dir = fixture();
        let outcome = execute(&args(false), &config(&dir), &flags()).unwrap();

        assert_eq!(outcome.summary.len(), 1);
        assert_eq!(outcome.summary[0].identifier, "Avery");
        assert_eq!(outcome.summary[0].misnamed_count, 1);
        assert_eq!(outcome.summary[0].deficient_week_count, 0);
        assert_eq!(outcome.failures.len(), 2);

        let out = dir.path().join("out");
        assert!(out.join("Avery_audit.json").exists());
        assert!(out.join("Avery_report.csv").exists());
        assert!(out.join("summary.csv").exists());
        assert!(out.join("calendars").join("Avery_calendar.svg").exists());
        assert_eq!(outcome.files_written, 4);
    }

    #[test]
    fn calendars_can_be_skipped() {
        let dir = fixture();
        let outcome = execute(&args(true), &config(&dir), &flags()).unwrap();
        assert!(!dir.path().join("out").join("calendars").exists());
        assert_eq!(outcome.files_written, 3);
    }

    #[test]
    fn missing_rules_file_fails_the_run() {
        let dir = fixture();
        let mut config = config(&dir);
        config.paths.rules = dir.path().join("absent.json");
        let err = execute(&args(false), &config, &flags()).unwrap_err();
        assert!(format!("{err:#}").contains("absent.json"));
    }
}
