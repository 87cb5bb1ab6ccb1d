//! Input and output locations for a run.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_rules() -> PathBuf {
    PathBuf::from("data/audit_rules.json")
}

fn default_records() -> PathBuf {
    PathBuf::from("data/raw_logs")
}

fn default_output() -> PathBuf {
    PathBuf::from("data/audit_results")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PathsConfig {
    /// Audit rules JSON (`{"group_therapy": {tier: count}}`).
    #[serde(default = "default_rules")]
    pub rules: PathBuf,

    /// Directory of per-individual record JSON files.
    #[serde(default = "default_records")]
    pub records: PathBuf,

    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            rules: default_rules(),
            records: default_records(),
            output: default_output(),
        }
    }
}

impl PathsConfig {
    #[must_use]
    pub fn summary_file(&self) -> PathBuf {
        self.output.join("summary.csv")
    }

    #[must_use]
    pub fn calendar_dir(&self) -> PathBuf {
        self.output.join("calendars")
    }
}
