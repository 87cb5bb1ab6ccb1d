use std::fmt::Write as _;

use chrono::Datelike;
use tally_core::enums::SessionType;

use super::{CalendarModel, CalendarMonth};

const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const CELL_WIDTH: usize = 6;

fn session_letters(sessions: &[SessionType]) -> String {
    sessions
        .iter()
        .filter_map(|s| s.marker().chars().next())
        .collect()
}

fn legend() -> String {
    let types = SessionType::ALL
        .iter()
        .map(|s| format!("{}={}", &s.marker()[..1], s.label()))
        .collect::<Vec<_>>()
        .join("  ");
    format!("Legend: {types}  *=insufficient GT week")
}

fn render_month(model: &CalendarModel, month: &CalendarMonth, out: &mut String) {
    let _ = writeln!(out, "{} {}", month.name, month.year);
    let header = WEEKDAY_HEADERS
        .iter()
        .map(|h| format!("{h:<CELL_WIDTH$}"))
        .collect::<String>();
    let _ = writeln!(out, "{}", header.trim_end());

    for (row, week) in month.week_rows() {
        let mut cells = vec![" ".repeat(CELL_WIDTH); 7];
        for day in month.days.iter().filter(|d| d.row == row) {
            let letters = session_letters(&day.sessions);
            cells[day.column as usize] = format!("{:>2}{letters:<4}", day.date.day());
        }
        let mut line = cells.concat().trim_end().to_string();
        if model.is_insufficient(week) {
            line = format!("{line:<width$}  * week {week}", width = CELL_WIDTH * 7);
        }
        let _ = writeln!(out, "{line}");
    }
}

/// Render the calendar as fixed-width text for terminals.
#[must_use]
pub fn render_text(model: &CalendarModel) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Therapy calendar for {} ({} to {})",
        model.identifier, model.period_start, model.period_end
    );
    let _ = writeln!(
        out,
        "Required GT sessions per week: {}",
        model.required_per_week
    );
    let _ = writeln!(out, "{}", legend());

    for month in &model.months {
        out.push('\n');
        render_month(model, month, &mut out);
    }
    out
}
