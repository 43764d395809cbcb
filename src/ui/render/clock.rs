//! Clock view composition.

use crate::state::State;
use crate::ui::layout::{self, CENTER_BLOCK_WIDTH};
use crate::ui::{BigFont, Frame};
use crate::zones::{self, TIMEZONES};
use chrono::{Local, Utc};

const PROJECT_NAME: &str = "RETROCLOCK v1.0";

/// Rotation period of the footer hint and status texts.
const ROTATION_INTERVAL_SECS: i64 = 15;

/// The banner cycle: the project name is visible for the first
/// `BANNER_VISIBLE_SECS` of every `BANNER_CYCLE_SECS`.
const BANNER_CYCLE_SECS: u64 = 300;
const BANNER_VISIBLE_SECS: u64 = 10;

/// Minimum readable width of a side-by-side zone box; narrower layouts fall
/// back to a stacked list.
const MIN_ZONE_BOX_WIDTH: usize = 18;

const ZONE_BOX_GAP: &str = "  ";

const STATUS_MESSAGES: [&str; 5] = [
    "TIME SYNCED",
    "CALENDAR ONLINE",
    "IBM MODE",
    "SYSTEM READY",
    "STANDBY",
];

const LEFT_HINTS: [&str; 3] = [
    "TAB:CALENDAR T:12/24H C:COLOR",
    "1-9:TOGGLE TIMEZONE 0:RESET",
    "CTRL+C TO EXIT",
];

/// Build the clock view into the frame.
///
pub(super) fn clock(state: &State, font: &mut BigFont, frame: &mut Frame) {
    frame.top_border();
    frame.title_line(banner_title(state.uptime_secs()));
    frame.separator();
    super::header_line(state, frame);
    frame.separator();

    let art = font.render(&face_time(state.use_24h()));
    frame.digital_face(&art);

    zone_panel(state, frame);

    frame.separator();
    let epoch = Utc::now().timestamp();
    frame.status_bar(left_hint(epoch), &center_text(state), status_message(epoch));
    frame.bottom_border();
}

fn banner_title(uptime_secs: u64) -> &'static str {
    if uptime_secs % BANNER_CYCLE_SECS < BANNER_VISIBLE_SECS {
        PROJECT_NAME
    } else {
        "SYSTEM CLOCK"
    }
}

fn left_hint(epoch_secs: i64) -> &'static str {
    LEFT_HINTS[(epoch_secs / ROTATION_INTERVAL_SECS) as usize % LEFT_HINTS.len()]
}

fn status_message(epoch_secs: i64) -> &'static str {
    STATUS_MESSAGES[(epoch_secs / ROTATION_INTERVAL_SECS) as usize % STATUS_MESSAGES.len()]
}

/// Face text is seconds-precision local time. 12h mode drops the meridiem
/// suffix from the big face; it still renders in the header line.
///
fn face_time(use_24h: bool) -> String {
    if use_24h {
        Local::now().format("%H:%M:%S").to_string()
    } else {
        Local::now().format("%I:%M:%S").to_string()
    }
}

/// Status-bar center: the local GMT label, or the joined names of the
/// active zones.
///
fn center_text(state: &State) -> String {
    if state.active_zones().is_empty() {
        zones::local_gmt_label()
    } else {
        let names: Vec<&str> = state
            .active_zones()
            .iter()
            .map(|&index| TIMEZONES[index].name)
            .collect();
        joined_zone_names(&names)
    }
}

/// Join zone names with " + ", collapsing to "<N> ZONES ACTIVE" when the
/// joined text overflows the center block.
///
fn joined_zone_names(names: &[&str]) -> String {
    let joined = names.join(" + ");
    if joined.chars().count() > CENTER_BLOCK_WIDTH {
        format!("{} ZONES ACTIVE", names.len())
    } else {
        joined
    }
}

/// Extra world clocks below the main face: side-by-side boxes when each box
/// gets at least the minimum width, a stacked compact list otherwise.
///
fn zone_panel(state: &State, frame: &mut Frame) {
    if state.active_zones().is_empty() {
        return;
    }
    frame.separator();

    let width = frame.width();
    let count = state.active_zones().len();
    let box_width = (width - 4 - (count - 1) * ZONE_BOX_GAP.len()) / count;

    if box_width < MIN_ZONE_BOX_WIDTH {
        for &index in state.active_zones() {
            let entry = &TIMEZONES[index];
            let line = format!(
                "  {}: {} ({})",
                entry.name,
                zones::zone_time(entry, state.use_24h()),
                entry.gmt
            );
            frame.centered_line(&line);
        }
    } else {
        for row in 0..3 {
            let boxes: Vec<String> = state
                .active_zones()
                .iter()
                .map(|&index| {
                    let entry = &TIMEZONES[index];
                    let content = match row {
                        0 => entry.name.to_string(),
                        1 => zones::zone_time(entry, state.use_24h()),
                        _ => entry.gmt.to_string(),
                    };
                    format!("[{}]", layout::pad_center(&content, box_width - 2))
                })
                .collect();
            frame.centered_line(&boxes.join(ZONE_BOX_GAP));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_visible_at_cycle_start() {
        assert_eq!(banner_title(0), PROJECT_NAME);
        assert_eq!(banner_title(9), PROJECT_NAME);
        assert_eq!(banner_title(300), PROJECT_NAME);
        assert_eq!(banner_title(609), PROJECT_NAME);
    }

    #[test]
    fn test_banner_hidden_after_window() {
        assert_eq!(banner_title(10), "SYSTEM CLOCK");
        assert_eq!(banner_title(299), "SYSTEM CLOCK");
        assert_eq!(banner_title(310), "SYSTEM CLOCK");
    }

    #[test]
    fn test_left_hint_rotates_every_interval() {
        assert_eq!(left_hint(0), LEFT_HINTS[0]);
        assert_eq!(left_hint(14), LEFT_HINTS[0]);
        assert_eq!(left_hint(15), LEFT_HINTS[1]);
        assert_eq!(left_hint(30), LEFT_HINTS[2]);
        assert_eq!(left_hint(45), LEFT_HINTS[0]);
    }

    #[test]
    fn test_status_message_rotates_every_interval() {
        assert_eq!(status_message(0), STATUS_MESSAGES[0]);
        assert_eq!(status_message(15), STATUS_MESSAGES[1]);
        assert_eq!(status_message(15 * 5), STATUS_MESSAGES[0]);
    }

    #[test]
    fn test_face_time_shape() {
        assert_eq!(face_time(true).len(), 8);
        assert_eq!(face_time(false).len(), 8);
    }

    #[test]
    fn test_joined_zone_names_within_center_block() {
        assert_eq!(
            joined_zone_names(&["SAO PAULO", "LONDON"]),
            "SAO PAULO + LONDON"
        );
        assert_eq!(joined_zone_names(&["LA"]), "LA");
    }

    #[test]
    fn test_joined_zone_names_collapses_on_overflow() {
        assert_eq!(
            joined_zone_names(&["FIRST LONG NAME", "SECOND LONG NAME"]),
            "2 ZONES ACTIVE"
        );
        // "SAO PAULO + LONDON + SYDNEY" is 27 columns, over the 24 limit.
        assert_eq!(
            joined_zone_names(&["SAO PAULO", "LONDON", "SYDNEY"]),
            "3 ZONES ACTIVE"
        );
    }

    #[test]
    fn test_center_text_without_zones_is_gmt_label() {
        let state = State::new();
        assert!(center_text(&state).starts_with("GMT"));
    }

    #[test]
    fn test_center_text_with_zones_lists_names() {
        let mut state = State::new();
        state.toggle_zone(0);
        state.toggle_zone(3);
        assert_eq!(center_text(&state), "LA + LONDON");
    }
}
