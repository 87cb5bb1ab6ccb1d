use std::path::{Path, PathBuf};

use tally_core::entities::AuditResult;

use crate::{ReportError, ensure_dir, file_stem, warn_on_stem_collisions, write_file};

/// Write `<identifier>_audit.json` for every result into `dir`.
pub fn write_json_documents(
    results: &[AuditResult],
    dir: &Path,
) -> Result<Vec<PathBuf>, ReportError> {
    ensure_dir(dir)?;
    warn_on_stem_collisions(results, "json");
    let mut written = Vec::with_capacity(results.len());
    for result in results {
        let body = serde_json::to_string_pretty(result).map_err(|source| ReportError::Json {
            identifier: result.identifier.clone(),
            source,
        })?;
        let path = dir.join(format!("{}_audit.json", file_stem(&result.identifier)));
        written.push(write_file(path, &body)?);
    }
    tracing::info!(count = written.len(), dir = %dir.display(), "wrote JSON results");
    Ok(written)
}
