//! Compliance evaluation over week buckets.

use chrono::NaiveDate;
use tally_core::entities::Deficiency;
use tally_core::enums::WeekStart;

use crate::weeks::{WeekBuckets, align_to_week_start, total_weeks};

/// Report every week in `1..=total_weeks` whose file count is below `required`.
///
/// `files` pairs each valid filename with its extracted date; undated entries and
/// entries before the week-1 anchor are ignored. Bucket indices come from the
/// aligned anchor while the number of evaluated weeks comes from the unaligned
/// start date, so the two can disagree by one week for mid-week starts.
#[must_use]
pub fn evaluate<'a, I>(
    start_date: NaiveDate,
    files: I,
    required: u32,
    horizon_end: NaiveDate,
    week_start: WeekStart,
) -> Vec<Deficiency>
where
    I: IntoIterator<Item = (&'a str, Option<NaiveDate>)>,
{
    if required == 0 {
        return Vec::new();
    }

    let anchor = align_to_week_start(start_date, week_start);
    let buckets = WeekBuckets::group(files, anchor);
    deficiencies(&buckets, total_weeks(start_date, horizon_end), required)
}

/// Deficient weeks from already-built buckets.
#[must_use]
pub fn deficiencies(buckets: &WeekBuckets, total_weeks: u32, required: u32) -> Vec<Deficiency> {
    let mut deficient: Vec<Deficiency> = (1..=total_weeks)
        .filter_map(|week| {
            let count = buckets.count(week);
            (count < required).then_some(Deficiency {
                week,
                count,
                required,
            })
        })
        .collect();
    deficient.sort_by_key(|d| d.week);
    deficient
}
