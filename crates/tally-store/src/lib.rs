//! # tally-store
//!
//! Reads the inputs of an audit run from disk:
//! - the audit rules file (`{"group_therapy": {tier: count}}`) as a [`Policy`]
//! - a directory of per-individual record files, one JSON object per file
//!
//! Record files are loaded independently so one malformed file is reported on its
//! own and never hides the others.
//!
//! [`Policy`]: tally_core::policy::Policy

mod error;
mod records;
mod rules;

pub use error::StoreError;
pub use records::{LoadedRecord, load_record, load_records};
pub use rules::{AuditRules, load_rules};
