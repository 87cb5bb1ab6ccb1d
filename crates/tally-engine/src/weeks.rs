//! Week alignment and bucketing.
//!
//! Week 1 begins at the anchor: the most recent configured week-start weekday on or
//! before the start date. Week N begins `(N - 1) * 7` days after the anchor. Dates
//! before the anchor belong to no week.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use tally_core::enums::WeekStart;

/// Anchor date of week 1 for an individual starting on `start_date`.
#[must_use]
pub fn align_to_week_start(start_date: NaiveDate, week_start: WeekStart) -> NaiveDate {
    let back = u64::from(week_start.days_since(start_date));
    start_date
        .checked_sub_days(Days::new(back))
        .unwrap_or(start_date)
}

/// 1-based week containing `date`, or `None` when `date` precedes the anchor.
#[must_use]
pub fn week_index(anchor: NaiveDate, date: NaiveDate) -> Option<u32> {
    let days = (date - anchor).num_days();
    if days < 0 {
        return None;
    }
    u32::try_from(days / 7 + 1).ok()
}

/// Number of weeks evaluated between the unaligned start date and the horizon.
///
/// `ceil(days / 7)`, never negative.
#[must_use]
pub fn total_weeks(start_date: NaiveDate, horizon_end: NaiveDate) -> u32 {
    let days = (horizon_end - start_date).num_days();
    if days <= 0 {
        return 0;
    }
    u32::try_from((days + 6) / 7).unwrap_or(u32::MAX)
}

/// Files grouped by week index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekBuckets {
    buckets: BTreeMap<u32, Vec<String>>,
}

impl WeekBuckets {
    /// Bucket dated files by week relative to `anchor`.
    ///
    /// Undated files and files dated before the anchor are skipped.
    #[must_use]
    pub fn group<'a, I>(files: I, anchor: NaiveDate) -> Self
    where
        I: IntoIterator<Item = (&'a str, Option<NaiveDate>)>,
    {
        let mut buckets: BTreeMap<u32, Vec<String>> = BTreeMap::new();
        for (filename, date) in files {
            let Some(date) = date else {
                tracing::debug!(filename, "skipping undated file");
                continue;
            };
            let Some(week) = week_index(anchor, date) else {
                tracing::debug!(filename, %date, %anchor, "skipping file dated before anchor");
                continue;
            };
            buckets.entry(week).or_default().push(filename.to_string());
        }
        Self { buckets }
    }

    /// Number of files in `week` (0 when the week has none).
    #[must_use]
    pub fn count(&self, week: u32) -> u32 {
        self.buckets
            .get(&week)
            .map_or(0, |files| u32::try_from(files.len()).unwrap_or(u32::MAX))
    }
}
