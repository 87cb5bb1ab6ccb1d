//! Filename classification against the session naming convention.
//!
//! A filename documents a session of a given type when, case-insensitively, it
//! contains the type's marker, a `YYYY-MM-DD` date somewhere after the marker, and
//! ends with `.docx`, and the first date-shaped substring in the name is a real
//! calendar date.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use tally_core::entities::Classification;
use tally_core::enums::SessionType;

const DATE_PATTERN: &str = r"[0-9]{4}-[0-9]{2}-[0-9]{2}";

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DATE_PATTERN).expect("invalid date pattern"));

static NAMING_RES: LazyLock<Vec<(SessionType, Regex)>> = LazyLock::new(|| {
    SessionType::ALL
        .into_iter()
        .map(|session_type| {
            let re = Regex::new(&naming_pattern(session_type)).expect("invalid naming pattern");
            (session_type, re)
        })
        .collect()
});

fn naming_pattern(session_type: SessionType) -> String {
    format!(
        r"(?i){}.*{DATE_PATTERN}.*\.docx$",
        regex::escape(session_type.marker())
    )
}

/// Extract the first `YYYY-MM-DD` substring as a date.
///
/// Only the first match is considered; if it is not a real calendar date
/// (month 13, February 30, year 0) the result is `None`.
#[must_use]
pub fn extract_date(filename: &str) -> Option<NaiveDate> {
    let found = DATE_RE.find(filename)?;
    NaiveDate::parse_from_str(found.as_str(), "%Y-%m-%d")
        .ok()
        .filter(|date| date.year() >= 1)
}

/// Whether the name has the marker/date/extension shape, ignoring date validity.
#[must_use]
pub fn matches_naming(filename: &str, session_type: SessionType) -> bool {
    NAMING_RES
        .iter()
        .find(|(kind, _)| *kind == session_type)
        .is_some_and(|(_, re)| re.is_match(filename))
}

/// Classify `filename` as evidence of a group-therapy session.
#[must_use]
pub fn classify(filename: &str) -> Classification {
    classify_as(filename, SessionType::Group)
}

/// Classify `filename` as evidence of a `session_type` session.
#[must_use]
pub fn classify_as(filename: &str, session_type: SessionType) -> Classification {
    let date = extract_date(filename);
    let is_valid = date.is_some() && matches_naming(filename, session_type);
    Classification {
        filename: filename.to_string(),
        session_type,
        is_valid,
        date,
    }
}

/// First session type, in GT/IT/FT order, that `filename` validly documents.
#[must_use]
pub fn detect_session_type(filename: &str) -> Option<SessionType> {
    SessionType::ALL
        .into_iter()
        .find(|session_type| classify_as(filename, *session_type).is_valid)
}

/// Split filenames into valid-GT and misnamed lists, preserving submission order.
#[must_use]
pub fn partition(filenames: &[String]) -> (Vec<Classification>, Vec<String>) {
    let mut valid = Vec::new();
    let mut misnamed = Vec::new();
    for filename in filenames {
        let classification = classify(filename);
        if classification.is_valid {
            valid.push(classification);
        } else {
            misnamed.push(filename.clone());
        }
    }
    (valid, misnamed)
}
