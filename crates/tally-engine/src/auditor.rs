//! Per-record audit and the parallel run over many records.

use chrono::NaiveDate;
use rayon::prelude::*;
use tally_core::entities::{AuditResult, IndividualRecord};
use tally_core::enums::WeekStart;
use tally_core::errors::RecordError;
use tally_core::policy::Policy;
use tally_core::responses::{RecordFailure, RunReport};

use crate::classifier::partition;
use crate::evaluator::evaluate;
use crate::weeks::total_weeks;

/// Inputs shared by every record in a run.
#[derive(Debug, Clone)]
pub struct AuditSettings {
    pub policy: Policy,
    pub horizon_end: NaiveDate,
    pub week_start: WeekStart,
}

impl AuditSettings {
    #[must_use]
    pub fn new(policy: Policy, horizon_end: NaiveDate) -> Self {
        Self {
            policy,
            horizon_end,
            week_start: WeekStart::default(),
        }
    }

    #[must_use]
    pub const fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }
}

/// Parse a record's `YYYY-MM-DD` start date, attributing failures to the record.
pub fn parse_start_date(record: &IndividualRecord) -> Result<NaiveDate, RecordError> {
    NaiveDate::parse_from_str(&record.start_date, "%Y-%m-%d").map_err(|source| {
        RecordError::InvalidStartDate {
            identifier: record.identifier.clone(),
            value: record.start_date.clone(),
            source,
        }
    })
}

/// Audit one individual's group-therapy evidence.
pub fn audit_record(
    record: &IndividualRecord,
    settings: &AuditSettings,
) -> Result<AuditResult, RecordError> {
    let start_date = parse_start_date(record)?;

    if !settings.policy.knows_tier(&record.policy_tier) {
        tracing::debug!(
            identifier = %record.identifier,
            tier = %record.policy_tier,
            default = settings.policy.default_required,
            "unknown policy tier; using default requirement"
        );
    }
    let required = settings.policy.required_for(&record.policy_tier);

    let (valid, misnamed_files) = partition(&record.filenames);
    let deficient_weeks = evaluate(
        start_date,
        valid.iter().map(|c| (c.filename.as_str(), c.date)),
        required,
        settings.horizon_end,
        settings.week_start,
    );

    tracing::debug!(
        identifier = %record.identifier,
        valid = valid.len(),
        misnamed = misnamed_files.len(),
        deficient = deficient_weeks.len(),
        "audited record"
    );

    Ok(AuditResult {
        identifier: record.identifier.clone(),
        policy_tier: record.policy_tier.clone(),
        start_date,
        required_per_week: required,
        total_weeks: total_weeks(start_date, settings.horizon_end),
        valid_gt_files: valid.into_iter().map(|c| c.filename).collect(),
        misnamed_files,
        deficient_weeks,
    })
}

/// Audit every record in parallel.
///
/// Results keep the input order. A record that fails is reported in
/// [`RunReport::failures`] and never stops the others.
#[must_use]
pub fn audit_all(records: &[IndividualRecord], settings: &AuditSettings) -> RunReport {
    let outcomes: Vec<Result<AuditResult, RecordFailure>> = records
        .par_iter()
        .map(|record| {
            audit_record(record, settings).map_err(|error| {
                tracing::warn!(identifier = %record.identifier, %error, "record rejected");
                RecordFailure {
                    source: record.identifier.clone(),
                    error: error.to_string(),
                }
            })
        })
        .collect();

    let mut report = RunReport::default();
    for outcome in outcomes {
        match outcome {
            Ok(result) => report.results.push(result),
            Err(failure) => report.failures.push(failure),
        }
    }
    report
}
