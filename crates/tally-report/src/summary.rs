use std::path::Path;

use tally_core::entities::AuditResult;
use tally_core::responses::SummaryRow;

use crate::{ReportError, csv, ensure_dir, write_file};

pub const SUMMARY_HEADERS: [&str; 5] = [
    "identifier",
    "policy_tier",
    "start_date",
    "misnamed_count",
    "deficient_week_count",
];

/// Render the summary CSV for `results`.
#[must_use]
pub fn render_summary_csv(results: &[AuditResult]) -> String {
    let mut out = csv::line(SUMMARY_HEADERS);
    for row in results.iter().map(SummaryRow::from) {
        out.push_str(&csv::line([
            row.identifier,
            row.policy_tier,
            row.start_date.to_string(),
            row.misnamed_count.to_string(),
            row.deficient_week_count.to_string(),
        ]));
    }
    out
}

/// Write the summary CSV to `path`, creating its parent directory.
pub fn write_summary_csv(results: &[AuditResult], path: &Path) -> Result<(), ReportError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    write_file(path.to_path_buf(), &render_summary_csv(results))?;
    tracing::info!(path = %path.display(), rows = results.len(), "wrote CSV summary");
    Ok(())
}
