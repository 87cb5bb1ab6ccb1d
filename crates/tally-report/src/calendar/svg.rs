use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use chrono::Datelike;
use tally_core::enums::SessionType;

use super::{CalendarDay, CalendarModel, CalendarMonth};
use crate::{ReportError, ensure_dir, file_stem, write_file};

const CELL: u32 = 22;
const MONTH_HEADER: u32 = 36;
const MONTH_GAP: u32 = 24;
const MONTHS_PER_ROW: u32 = 4;
const GRID_ROWS: u32 = 6;
const TITLE_HEIGHT: u32 = 48;
const LEGEND_HEIGHT: u32 = 40;
const NO_SESSION_COLOR: &str = "lightgrey";
const INSUFFICIENT_COLOR: &str = "red";
const WEEKDAY_INITIALS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const fn month_width() -> u32 {
    CELL * 7
}

const fn month_height() -> u32 {
    MONTH_HEADER + CELL * GRID_ROWS
}

fn render_day(day: &CalendarDay, x0: u32, y0: u32, out: &mut String) {
    let x = x0 + day.column * CELL;
    let y = y0 + MONTH_HEADER + day.row * CELL;

    if day.sessions.is_empty() {
        let _ = writeln!(
            out,
            r#"<rect x="{x}" y="{y}" width="{CELL}" height="{CELL}" fill="{NO_SESSION_COLOR}"/>"#
        );
    } else {
        let count = u32::try_from(day.sessions.len()).unwrap_or(1);
        let stripe = CELL / count;
        for (i, session) in (0u32..).zip(day.sessions.iter()) {
            let _ = writeln!(
                out,
                r#"<rect x="{x}" y="{}" width="{CELL}" height="{stripe}" fill="{}"/>"#,
                y + i * stripe,
                session.color()
            );
        }
    }

    let _ = writeln!(
        out,
        r#"<rect x="{x}" y="{y}" width="{CELL}" height="{CELL}" fill="none" stroke="black" stroke-width="0.5"/>"#
    );
    let _ = writeln!(
        out,
        r#"<text x="{}" y="{}" font-size="8" text-anchor="middle">{}</text>"#,
        x + CELL / 2,
        y + CELL / 2 + 3,
        day.date.day()
    );
}

fn render_month(model: &CalendarModel, month: &CalendarMonth, index: u32, out: &mut String) {
    let x0 = MONTH_GAP + (index % MONTHS_PER_ROW) * (month_width() + MONTH_GAP);
    let y0 = TITLE_HEIGHT + (index / MONTHS_PER_ROW) * (month_height() + MONTH_GAP);

    let _ = writeln!(
        out,
        r#"<text x="{}" y="{}" font-size="11" text-anchor="middle">{} {}</text>"#,
        x0 + month_width() / 2,
        y0 + 12,
        month.name,
        month.year
    );
    for (col, label) in (0u32..).zip(WEEKDAY_INITIALS) {
        let _ = writeln!(
            out,
            r#"<text x="{}" y="{}" font-size="6" font-weight="bold" text-anchor="middle">{label}</text>"#,
            x0 + col * CELL + CELL / 2,
            y0 + MONTH_HEADER - 6
        );
    }

    for day in &month.days {
        render_day(day, x0, y0, out);
    }

    for (row, week) in month.week_rows() {
        if !model.is_insufficient(week) {
            continue;
        }
        let columns: Vec<u32> = month
            .days
            .iter()
            .filter(|d| d.row == row)
            .map(|d| d.column)
            .collect();
        let (Some(first), Some(last)) = (columns.iter().min(), columns.iter().max()) else {
            continue;
        };
        let _ = writeln!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{CELL}" fill="none" stroke="{INSUFFICIENT_COLOR}" stroke-width="2"/>"#,
            x0 + first * CELL,
            y0 + MONTH_HEADER + row * CELL,
            (last - first + 1) * CELL
        );
    }
}

fn render_legend(y: u32, out: &mut String) {
    let mut x = MONTH_GAP;
    let entries = SessionType::ALL
        .iter()
        .map(|s| (s.color(), s.marker(), false))
        .chain([
            (NO_SESSION_COLOR, "No Session", false),
            (INSUFFICIENT_COLOR, "Insufficient GT", true),
        ]);
    for (color, label, outline) in entries {
        let fill = if outline { "none" } else { color };
        let _ = writeln!(
            out,
            r#"<rect x="{x}" y="{y}" width="12" height="12" fill="{fill}" stroke="{color}" stroke-width="2"/>"#
        );
        let _ = writeln!(
            out,
            r#"<text x="{}" y="{}" font-size="10">{label}</text>"#,
            x + 16,
            y + 10
        );
        x += 110;
    }
}

/// Render the calendar as a standalone SVG document.
#[must_use]
pub fn render_svg(model: &CalendarModel) -> String {
    let month_count = u32::try_from(model.months.len()).unwrap_or(u32::MAX);
    let grid_rows = month_count.div_ceil(MONTHS_PER_ROW).max(1);
    let width = MONTH_GAP + MONTHS_PER_ROW * (month_width() + MONTH_GAP);
    let legend_y = TITLE_HEIGHT + grid_rows * (month_height() + MONTH_GAP);
    let height = legend_y + LEGEND_HEIGHT;

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" font-family="sans-serif">"#
    );
    let _ = writeln!(out, r#"<rect width="100%" height="100%" fill="white"/>"#);
    let _ = writeln!(
        out,
        r#"<text x="{}" y="30" font-size="16" text-anchor="middle">Therapy Calendar for {} - {} to {}</text>"#,
        width / 2,
        escape_xml(&model.identifier),
        model.period_start,
        model.period_end
    );

    for (index, month) in (0u32..).zip(model.months.iter()) {
        render_month(model, month, index, &mut out);
    }
    render_legend(legend_y, &mut out);
    out.push_str("</svg>\n");
    out
}

/// Write `<identifier>_calendar.svg` into `dir`.
pub fn write_calendar_svg(model: &CalendarModel, dir: &Path) -> Result<PathBuf, ReportError> {
    ensure_dir(dir)?;
    let path = dir.join(format!("{}_calendar.svg", file_stem(&model.identifier)));
    write_file(path, &render_svg(model))
}
