//! # tally-core
//!
//! Core types shared across all Tally crates.
//!
//! This crate provides:
//! - Entity structs for individual records, audit results, and deficiencies
//! - Session-type and week-start enums with their lookup tables
//! - The tier → weekly requirement `Policy`
//! - Per-record error types
//! - Run-level response types (summary rows, run reports)

pub mod entities;
pub mod enums;
pub mod errors;
pub mod policy;
pub mod responses;
