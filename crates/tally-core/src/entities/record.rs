use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One individual's submitted evidence, as delivered by the loader.
///
/// Field aliases accept the legacy raw-log keys (`youth`, `security_level`, `files`).
/// The start date is kept as the raw string so the auditor can attribute a parse
/// failure to this record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct IndividualRecord {
    #[serde(alias = "youth")]
    pub identifier: String,
    #[serde(alias = "security_level")]
    pub policy_tier: String,
    pub start_date: String,
    #[serde(alias = "files", default)]
    pub filenames: Vec<String>,
}
