//! Run-level response types returned as JSON by `tally` commands.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::AuditResult;

/// One line of the run summary table.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SummaryRow {
    pub identifier: String,
    pub policy_tier: String,
    pub start_date: NaiveDate,
    pub misnamed_count: usize,
    pub deficient_week_count: usize,
}

impl From<&AuditResult> for SummaryRow {
    fn from(result: &AuditResult) -> Self {
        Self {
            identifier: result.identifier.clone(),
            policy_tier: result.policy_tier.clone(),
            start_date: result.start_date,
            misnamed_count: result.misnamed_files.len(),
            deficient_week_count: result.deficient_weeks.len(),
        }
    }
}

/// A record that could not be audited.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RecordFailure {
    /// Identifier or file path the failure is attributed to.
    pub source: String,
    pub error: String,
}

/// Results and per-record failures of a whole audit run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RunReport {
    pub results: Vec<AuditResult>,
    pub failures: Vec<RecordFailure>,
}

impl RunReport {
    #[must_use]
    pub fn summary_rows(&self) -> Vec<SummaryRow> {
        self.results.iter().map(SummaryRow::from).collect()
    }

    /// Append another report, keeping results and failures in order.
    pub fn merge(&mut self, other: Self) {
        self.results.extend(other.results);
        self.failures.extend(other.failures);
    }
}
