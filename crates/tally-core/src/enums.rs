//! Session types and week-start weekdays.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use chrono::{Datelike, NaiveDate, Weekday};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// SessionType
// ---------------------------------------------------------------------------

/// Kind of therapy session a submitted file documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SessionType {
    Group,
    Individual,
    Family,
}

impl SessionType {
    /// Every session type, in classification priority order.
    pub const ALL: [Self; 3] = [Self::Group, Self::Individual, Self::Family];

    /// Marker that must appear in a filename documenting this session type.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Group => "GT",
            Self::Individual => "IT",
            Self::Family => "FT",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Group => "Group therapy",
            Self::Individual => "Individual therapy",
            Self::Family => "Family therapy",
        }
    }

    /// Display color used by calendar renderers.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Group => "green",
            Self::Individual => "orange",
            Self::Family => "blue",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Group => "group",
            Self::Individual => "individual",
            Self::Family => "family",
        }
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SessionType {
    type Err = String;

    /// Accepts either the marker (`gt`, `it`, `ft`) or the long name.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "gt" | "group" => Ok(Self::Group),
            "it" | "individual" => Ok(Self::Individual),
            "ft" | "family" => Ok(Self::Family),
            other => Err(format!("unknown session type '{other}'")),
        }
    }
}

// ---------------------------------------------------------------------------
// WeekStart
// ---------------------------------------------------------------------------

/// Weekday on which a bucketing week begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WeekStart {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Alignment used when counting sessions per week for compliance.
pub const AUDIT_WEEK_START: WeekStart = WeekStart::Monday;

/// Alignment used when laying out and flagging weeks on the calendar.
pub const CALENDAR_WEEK_START: WeekStart = WeekStart::Sunday;

impl WeekStart {
    #[must_use]
    pub const fn weekday(self) -> Weekday {
        match self {
            Self::Monday => Weekday::Mon,
            Self::Tuesday => Weekday::Tue,
            Self::Wednesday => Weekday::Wed,
            Self::Thursday => Weekday::Thu,
            Self::Friday => Weekday::Fri,
            Self::Saturday => Weekday::Sat,
            Self::Sunday => Weekday::Sun,
        }
    }

    /// Days elapsed since the most recent occurrence of this weekday (0..=6).
    #[must_use]
    pub fn days_since(self, date: NaiveDate) -> u32 {
        let today = date.weekday().num_days_from_monday();
        let start = self.weekday().num_days_from_monday();
        (today + 7 - start) % 7
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }
}

impl Default for WeekStart {
    fn default() -> Self {
        AUDIT_WEEK_START
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// IssueKind
// ---------------------------------------------------------------------------

/// Row category in a per-individual issue listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    MissingSession,
    MisnamedFile,
}

impl IssueKind {
    /// Human-readable label written in the `Issue Type` column.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MissingSession => "Missing GT",
            Self::MisnamedFile => "Misnamed File",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
