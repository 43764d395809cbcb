//! Calendar view composition.

use crate::state::State;
use crate::ui::Frame;
use chrono::{Datelike, NaiveDate};

/// Fixed number of content lines the month grid is centered within.
const CONTENT_AREA_LINES: usize = 18;

const WEEKDAY_HEADER: &str = " Mo | Tu | We | Th | Fr | Sa | Su ";
const HEADER_RULE_WIDTH: usize = 29;

/// Build the calendar view into the frame.
///
pub(super) fn calendar(state: &State, frame: &mut Frame) {
    frame.top_border();
    frame.title_line(&format!(
        "CALENDAR {:02}/{}",
        state.calendar_month(),
        state.calendar_year()
    ));
    frame.separator();
    super::header_line(state, frame);
    frame.separator();

    let mut lines = vec![
        WEEKDAY_HEADER.to_string(),
        "-".repeat(HEADER_RULE_WIDTH),
    ];
    for week in month_grid(state.calendar_year(), state.calendar_month()) {
        let cells: Vec<String> = week
            .iter()
            .map(|&day| {
                if day == 0 {
                    "  ".to_string()
                } else {
                    format!("{:2}", day)
                }
            })
            .collect();
        lines.push(cells.join(" | "));
    }

    let (top_pad, bottom_pad) = if lines.len() > CONTENT_AREA_LINES {
        (0, 0)
    } else {
        let top = (CONTENT_AREA_LINES - lines.len()) / 2;
        (top, CONTENT_AREA_LINES - lines.len() - top)
    };
    for _ in 0..top_pad {
        frame.blank_line();
    }
    for line in &lines {
        frame.centered_line(line);
    }
    for _ in 0..bottom_pad {
        frame.blank_line();
    }

    frame.separator();
    frame.status_bar("TAB TO CLOCK", "CALENDAR MODE", "H/L:MONTH  J/K:YEAR");
    frame.bottom_border();
}

/// Monday-first week rows for a month; cells outside the month are zero.
/// Years outside the supported date range produce an empty grid.
///
fn month_grid(year: i32, month: u32) -> Vec<[u32; 7]> {
    let first = match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(date) => date,
        None => return Vec::new(),
    };
    let offset = first.weekday().num_days_from_monday() as usize;
    let days = days_in_month(year, month);

    let mut weeks = Vec::new();
    let mut week = [0u32; 7];
    let mut slot = offset;
    for day in 1..=days {
        week[slot] = day;
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [0; 7];
            slot = 0;
        }
    }
    if slot > 0 {
        weeks.push(week);
    }
    weeks
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|date| date.pred_opt())
        .map(|date| date.day())
        .unwrap_or(31)
}
