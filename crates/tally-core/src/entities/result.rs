use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Deficiency;

/// Compliance audit outcome for a single individual.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditResult {
    pub identifier: String,
    pub policy_tier: String,
    pub start_date: NaiveDate,
    pub required_per_week: u32,
    pub total_weeks: u32,
    /// Correctly named, dated GT files, in submission order.
    pub valid_gt_files: Vec<String>,
    /// Every other submitted filename, in submission order.
    pub misnamed_files: Vec<String>,
    /// Weeks below requirement, ascending by week index.
    pub deficient_weeks: Vec<Deficiency>,
}

impl AuditResult {
    /// Valid and misnamed filenames together, valid first.
    #[must_use]
    pub fn all_filenames(&self) -> Vec<String> {
        self.valid_gt_files
            .iter()
            .chain(self.misnamed_files.iter())
            .cloned()
            .collect()
    }
}
