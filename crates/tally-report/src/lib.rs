//! # tally-report
//!
//! Turns audit results into files and views:
//! - one pretty JSON document per individual
//! - a CSV summary row per individual
//! - a CSV issue listing per individual (missing weeks, misnamed files)
//! - a calendar model rendered as terminal text or SVG

pub mod calendar;
mod csv;
mod error;
mod issues;
mod json;
mod summary;

pub use error::ReportError;
pub use issues::{IssueRow, issue_rows, render_issue_csv, write_issue_reports};
pub use json::write_json_documents;
pub use summary::{SUMMARY_HEADERS, render_summary_csv, write_summary_csv};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tally_core::entities::AuditResult;

/// Filesystem-safe stem for per-individual output files.
#[must_use]
pub fn file_stem(identifier: &str) -> String {
    identifier
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, ' ' | '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Stems shared by more than one distinct identifier, with those identifiers.
///
/// Each such stem names a single output file, so later results overwrite earlier ones.
#[must_use]
pub fn colliding_stems<'a, I>(identifiers: I) -> BTreeMap<String, Vec<&'a str>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut by_stem: BTreeMap<String, Vec<&'a str>> = BTreeMap::new();
    for identifier in identifiers {
        let owners = by_stem.entry(file_stem(identifier)).or_default();
        if !owners.contains(&identifier) {
            owners.push(identifier);
        }
    }
    by_stem.retain(|_, owners| owners.len() > 1);
    by_stem
}

pub(crate) fn warn_on_stem_collisions(results: &[AuditResult], output: &str) {
    for (stem, identifiers) in colliding_stems(results.iter().map(|r| r.identifier.as_str())) {
        tracing::warn!(
            %stem,
            ?identifiers,
            output,
            "identifiers share an output file; only the last one is kept"
        );
    }
}

pub(crate) fn ensure_dir(dir: &Path) -> Result<(), ReportError> {
    std::fs::create_dir_all(dir).map_err(|e| ReportError::io(dir, e))
}

pub(crate) fn write_file(path: PathBuf, contents: &str) -> Result<PathBuf, ReportError> {
    std::fs::write(&path, contents).map_err(|e| ReportError::io(&path, e))?;
    Ok(path)
}
