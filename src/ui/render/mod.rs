//! Frame composition.
//!
//! Builds one complete screen for the active view. State is read once at
//! the start of composition; every emitted line has the same fixed rendered
//! width regardless of content.

mod calendar;
mod clock;

use crate::state::{Mode, State};
use crate::ui::layout::{self, FRAME_WIDTH};
use crate::ui::{BigFont, Frame};
use crate::zones;
use chrono::Local;

/// Compose one full frame for the current state.
///
pub fn compose(state: &State, font: &mut BigFont) -> Frame {
    let mut frame = Frame::new(FRAME_WIDTH);
    match state.mode() {
        Mode::Clock => clock::clock(state, font, &mut frame),
        Mode::Calendar => calendar::calendar(state, &mut frame),
    }
    frame
}

/// Header line shared by both views: date on the left, weekday centered,
/// local time on the right.
///
fn header_line(state: &State, frame: &mut Frame) {
    let now = Local::now();
    let date = now.format("%d/%m/%Y").to_string();
    let weekday = now.format("%A").to_string();
    let time = zones::local_time(state.use_24h());
    let left = format!("  DATE : {}", date);
    let line = layout::overlay_line(frame.width(), &left, &weekday, &time);
    frame.framed_line(&line);
}
