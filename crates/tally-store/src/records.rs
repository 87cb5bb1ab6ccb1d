use std::path::{Path, PathBuf};

use tally_core::entities::IndividualRecord;

use crate::StoreError;

/// One record file and the outcome of parsing it.
#[derive(Debug)]
pub struct LoadedRecord {
    pub path: PathBuf,
    pub record: Result<IndividualRecord, StoreError>,
}

/// Load a single record file.
pub fn load_record(path: &Path) -> Result<IndividualRecord, StoreError> {
    let raw = std::fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
    serde_json::from_str(&raw).map_err(|e| StoreError::parse(path, e))
}

/// Load every `*.json` file directly inside `dir`, sorted by path.
///
/// Fails only when the directory itself cannot be listed.
pub fn load_records(dir: &Path) -> Result<Vec<LoadedRecord>, StoreError> {
    let entries = std::fs::read_dir(dir).map_err(|e| StoreError::io(dir, e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| StoreError::io(dir, e))?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();

    let loaded: Vec<LoadedRecord> = paths
        .into_iter()
        .map(|path| {
            let record = load_record(&path);
            if let Err(error) = &record {
                tracing::warn!(%error, "skipping unreadable record file");
            }
            LoadedRecord { path, record }
        })
        .collect();

    tracing::debug!(dir = %dir.display(), files = loaded.len(), "loaded record files");
    Ok(loaded)
}
