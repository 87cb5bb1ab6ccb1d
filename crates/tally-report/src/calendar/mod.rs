//! Per-individual session calendar.
//!
//! The calendar lays months out as Sunday-first grids and groups days into weeks
//! aligned to [`CALENDAR_WEEK_START`], which is deliberately not the alignment the
//! compliance audit buckets with. A calendar week is flagged insufficient when the
//! number of days carrying a group session falls below the individual's weekly
//! requirement. Weeks before the calendar anchor are never flagged.

mod svg;
mod text;

pub use svg::{render_svg, write_calendar_svg};
pub use text::render_text;

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tally_core::entities::AuditResult;
use tally_core::enums::{CALENDAR_WEEK_START, SessionType};
use tally_engine::classifier::{detect_session_type, extract_date};
use tally_engine::weeks::align_to_week_start;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// Session types documented on this day, in GT/IT/FT order.
    pub sessions: Vec<SessionType>,
    /// Week relative to the calendar anchor; zero or negative before it.
    pub week: i64,
    /// Grid row within the month (0-based, Sunday-first rows).
    pub row: u32,
    /// Grid column, Sunday = 0.
    pub column: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    pub name: String,
    pub days: Vec<CalendarDay>,
}

impl CalendarMonth {
    /// Distinct grid rows in this month with the calendar week each one shows.
    #[must_use]
    pub fn week_rows(&self) -> Vec<(u32, i64)> {
        let mut rows: BTreeMap<u32, i64> = BTreeMap::new();
        for day in &self.days {
            rows.entry(day.row).or_insert(day.week);
        }
        rows.into_iter().collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarModel {
    pub identifier: String,
    pub start_date: NaiveDate,
    pub required_per_week: u32,
    pub anchor: NaiveDate,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub months: Vec<CalendarMonth>,
    /// Days with a group session, per calendar week.
    pub group_days_per_week: BTreeMap<i64, u32>,
    pub insufficient_weeks: BTreeSet<i64>,
}

impl CalendarModel {
    /// Build the calendar for `result` from the filenames it was audited on.
    ///
    /// Each file counts toward at most one session type; files outside the period
    /// or without a usable date are ignored.
    #[must_use]
    pub fn build(
        result: &AuditResult,
        filenames: &[String],
        period_start: NaiveDate,
        period_end: NaiveDate,
    ) -> Self {
        let anchor = align_to_week_start(result.start_date, CALENDAR_WEEK_START);

        let mut sessions_by_day: BTreeMap<NaiveDate, BTreeSet<SessionType>> = BTreeMap::new();
        for filename in filenames {
            let (Some(session_type), Some(date)) =
                (detect_session_type(filename), extract_date(filename))
            else {
                continue;
            };
            if date < period_start || date > period_end {
                continue;
            }
            sessions_by_day.entry(date).or_default().insert(session_type);
        }

        let mut group_days_per_week: BTreeMap<i64, u32> = BTreeMap::new();
        for (date, sessions) in &sessions_by_day {
            if sessions.contains(&SessionType::Group) {
                *group_days_per_week
                    .entry(calendar_week(anchor, *date))
                    .or_default() += 1;
            }
        }

        let mut months: Vec<CalendarMonth> = Vec::new();
        let mut weeks_shown: BTreeSet<i64> = BTreeSet::new();
        for date in period_start.iter_days().take_while(|d| *d <= period_end) {
            let week = calendar_week(anchor, date);
            weeks_shown.insert(week);
            let day = CalendarDay {
                date,
                sessions: sessions_by_day
                    .get(&date)
                    .map(|s| s.iter().copied().collect())
                    .unwrap_or_default(),
                week,
                row: grid_row(date),
                column: date.weekday().num_days_from_sunday(),
            };

            match months.last_mut() {
                Some(month) if month.year == date.year() && month.month == date.month() => {
                    month.days.push(day);
                }
                _ => months.push(CalendarMonth {
                    year: date.year(),
                    month: date.month(),
                    name: date.format("%B").to_string(),
                    days: vec![day],
                }),
            }
        }

        let insufficient_weeks = weeks_shown
            .into_iter()
            .filter(|week| *week >= 1)
            .filter(|week| {
                group_days_per_week.get(week).copied().unwrap_or(0) < result.required_per_week
            })
            .collect();

        Self {
            identifier: result.identifier.clone(),
            start_date: result.start_date,
            required_per_week: result.required_per_week,
            anchor,
            period_start,
            period_end,
            months,
            group_days_per_week,
            insufficient_weeks,
        }
    }

    #[must_use]
    pub fn is_insufficient(&self, week: i64) -> bool {
        self.insufficient_weeks.contains(&week)
    }
}

/// Week number relative to `anchor`, flooring for dates before it.
fn calendar_week(anchor: NaiveDate, date: NaiveDate) -> i64 {
    (date - anchor).num_days().div_euclid(7) + 1
}

fn grid_row(date: NaiveDate) -> u32 {
    let first_column = date
        .with_day(1)
        .map_or(0, |first| first.weekday().num_days_from_sunday());
    (date.day() + first_column - 1) / 7
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn result(required: u32) -> AuditResult {
        AuditResult {
            identifier: "Avery".into(),
            policy_tier: "low".into(),
            start_date: date(2024, 1, 1),
            required_per_week: required,
            total_weeks: 5,
            valid_gt_files: vec![],
            misnamed_files: vec![],
            deficient_weeks: vec![],
        }
    }

    fn files(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_string()).collect()
    }

    #[test]
    fn anchor_is_sunday_aligned() {
        let model = CalendarModel::build(&result(2), &[], date(2024, 1, 1), date(2024, 1, 31));
        assert_eq!(model.anchor, date(2023, 12, 31));
    }

    #[test]
    fn days_carry_their_session_types() {
        let names = files(&[
            "Avery GT 2024-01-02.docx",
            "Avery IT 2024-01-02.docx",
            "Avery FT 2024-01-05.docx",
            "Avery GT 2024-01-02.docx",
            "unrelated.pdf",
        ]);
        let model = CalendarModel::build(&result(2), &names, date(2024, 1, 1), date(2024, 1, 31));
        let january = &model.months[0];
        let jan2 = &january.days[1];
        assert_eq!(jan2.date, date(2024, 1, 2));
        assert_eq!(jan2.sessions, vec![SessionType::Group, SessionType::Individual]);
        assert_eq!(january.days[4].sessions, vec![SessionType::Family]);
        assert!(january.days[0].sessions.is_empty());
    }

    #[test]
    fn duplicate_group_files_count_one_day() {
        let names = files(&["A GT 2024-01-02.docx", "A GT 2024-01-02 copy.docx"]);
        let model = CalendarModel::build(&result(2), &names, date(2024, 1, 1), date(2024, 1, 6));
        assert_eq!(model.group_days_per_week.get(&1), Some(&1));
        assert!(model.is_insufficient(1));
    }

    #[test]
    fn sufficient_week_is_not_flagged() {
        let names = files(&["A GT 2024-01-02.docx", "A GT 2024-01-04.docx"]);
        let model = CalendarModel::build(&result(2), &names, date(2024, 1, 1), date(2024, 1, 13));
        assert!(!model.is_insufficient(1));
        assert!(model.is_insufficient(2));
    }

    #[test]
    fn grid_positions_follow_sunday_first_layout() {
        let model = CalendarModel::build(&result(0), &[], date(2024, 2, 1), date(2024, 2, 29));
        let feb = &model.months[0];
        // 2024-02-01 is a Thursday.
        assert_eq!((feb.days[0].row, feb.days[0].column), (0, 4));
        // 2024-02-04 is the first Sunday, second row.
        assert_eq!((feb.days[3].row, feb.days[3].column), (1, 0));
        assert_eq!(feb.week_rows().len(), 5);
        assert!(model.insufficient_weeks.is_empty());
    }

    #[test]
    fn months_split_across_period() {
        let model = CalendarModel::build(&result(1), &[], date(2024, 1, 15), date(2024, 3, 10));
        let names: Vec<&str> = model.months.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["January", "February", "March"]);
        assert_eq!(model.months[2].days.len(), 10);
    }

    #[test]
    fn weeks_before_anchor_are_not_flagged() {
        let mut late = result(2);
        late.start_date = date(2024, 3, 6);
        let model = CalendarModel::build(&late, &[], date(2024, 1, 1), date(2024, 3, 31));
        assert!(model.insufficient_weeks.iter().all(|week| *week >= 1));
        assert!(model.months[0].days.iter().all(|d| d.week < 1));
    }
}
