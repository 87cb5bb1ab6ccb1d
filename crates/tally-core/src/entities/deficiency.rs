use chrono::{Days, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A week whose observed session count is below the required count.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, PartialOrd, Ord)]
pub struct Deficiency {
    /// 1-based week index.
    pub week: u32,
    pub count: u32,
    pub required: u32,
}

impl Deficiency {
    /// Label in the `week_N` form used by reports.
    #[must_use]
    pub fn week_label(&self) -> String {
        format!("week_{}", self.week)
    }

    /// Calendar date shown for this week in issue listings.
    ///
    /// Counts whole weeks from the unaligned start date, not from the bucketing anchor.
    #[must_use]
    pub fn week_of(&self, start_date: NaiveDate) -> NaiveDate {
        let offset = u64::from(self.week.saturating_sub(1)) * 7;
        start_date
            .checked_add_days(Days::new(offset))
            .unwrap_or(NaiveDate::MAX)
    }
}
