//! Per-record error types.
//!
//! Only structurally invalid upstream input surfaces here. Malformed dates inside
//! filenames and unknown policy tiers are absorbed into the audit result instead.

use thiserror::Error;

/// Errors that reject a single individual's record.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The record's start date is not a `YYYY-MM-DD` calendar date.
    #[error("Invalid start date for '{identifier}': '{value}' ({source})")]
    InvalidStartDate {
        identifier: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
