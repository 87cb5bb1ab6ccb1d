use std::path::{Path, PathBuf};

use serde::Serialize;
use tally_core::entities::AuditResult;
use tally_core::enums::IssueKind;

use crate::{ReportError, csv, ensure_dir, file_stem, warn_on_stem_collisions, write_file};

/// One line of an individual's issue listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueRow {
    pub kind: IssueKind,
    pub details: String,
}

/// Missing-session weeks first, then misnamed files, each in result order.
#[must_use]
pub fn issue_rows(result: &AuditResult) -> Vec<IssueRow> {
    let missing = result.deficient_weeks.iter().map(|d| IssueRow {
        kind: IssueKind::MissingSession,
        details: format!(
            "Week of {}: {} of {} sessions",
            d.week_of(result.start_date).format("%Y-%m-%d"),
            d.count,
            d.required
        ),
    });
    let misnamed = result.misnamed_files.iter().map(|f| IssueRow {
        kind: IssueKind::MisnamedFile,
        details: f.clone(),
    });
    missing.chain(misnamed).collect()
}

#[must_use]
pub fn render_issue_csv(result: &AuditResult) -> String {
    let mut out = csv::line(["Issue Type", "Details"]);
    for row in issue_rows(result) {
        out.push_str(&csv::line([row.kind.label(), row.details.as_str()]));
    }
    out
}

/// Write `<identifier>_report.csv` for every result into `dir`.
pub fn write_issue_reports(
    results: &[AuditResult],
    dir: &Path,
) -> Result<Vec<PathBuf>, ReportError> {
    ensure_dir(dir)?;
    warn_on_stem_collisions(results, "issue csv");
    let mut written = Vec::with_capacity(results.len());
    for result in results {
        let path = dir.join(format!("{}_report.csv", file_stem(&result.identifier)));
        written.push(write_file(path, &render_issue_csv(result))?);
    }
    tracing::info!(count = written.len(), dir = %dir.display(), "wrote issue reports");
    Ok(written)
}
