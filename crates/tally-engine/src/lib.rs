//! # tally-engine
//!
//! The audit core: decides which submitted filenames are correctly named, buckets
//! dated group-therapy files into weeks anchored at each individual's start date,
//! and reports every week whose count falls below the policy requirement.
//!
//! Everything here is pure and synchronous. [`auditor::audit_all`] fans records out
//! over a rayon pool because records share no state.

pub mod auditor;
pub mod classifier;
pub mod evaluator;
pub mod weeks;

pub use auditor::{AuditSettings, audit_all, audit_record};
pub use classifier::{classify, classify_as, extract_date};
pub use evaluator::evaluate;
pub use weeks::{WeekBuckets, align_to_week_start, total_weeks, week_index};
