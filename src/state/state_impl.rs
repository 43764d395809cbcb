//! The single authoritative application state.
//!
//! All fields are owned by the render loop thread; every transition is one
//! field update followed by setting the dirty flag, so no partially applied
//! mutation is ever observable by the frame composer.

use crate::state::Mode;
use crate::ui::theme::{Theme, DEFAULT_PALETTE, PALETTES};
use crate::zones::TIMEZONES;
use chrono::{Datelike, Local};
use std::time::Instant;

/// Maximum number of simultaneously active extra timezones.
///
const MAX_ACTIVE_ZONES: usize = 3;

/// Holds all mutable application data: active view, time format, palette
/// selection, active timezone set, calendar cursor, last known terminal
/// size, and the redraw flag.
///
pub struct State {
    mode: Mode,
    use_24h: bool,
    palette_index: usize,
    active_zones: Vec<usize>,
    calendar_year: i32,
    calendar_month: u32,
    terminal_width: u16,
    terminal_height: u16,
    dirty: bool,
    started_at: Instant,
}

impl State {
    /// Return the startup state: clock view, 24h format, green palette, no
    /// extra timezones, calendar cursor on the current month.
    ///
    pub fn new() -> Self {
        let today = Local::now();
        State {
            mode: Mode::Clock,
            use_24h: true,
            palette_index: DEFAULT_PALETTE,
            active_zones: Vec::new(),
            calendar_year: today.year(),
            calendar_month: today.month(),
            terminal_width: 80,
            terminal_height: 24,
            dirty: true,
            started_at: Instant::now(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn use_24h(&self) -> bool {
        self.use_24h
    }

    pub fn palette_index(&self) -> usize {
        self.palette_index
    }

    /// The currently selected palette.
    ///
    pub fn theme(&self) -> &'static Theme {
        &PALETTES[self.palette_index]
    }

    /// Active timezone table indices, sorted ascending.
    ///
    pub fn active_zones(&self) -> &[usize] {
        &self.active_zones
    }

    pub fn calendar_year(&self) -> i32 {
        self.calendar_year
    }

    pub fn calendar_month(&self) -> u32 {
        self.calendar_month
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        (self.terminal_width, self.terminal_height)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the redraw flag after a frame has been emitted.
    ///
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Whole seconds since the application started; drives the banner cycle.
    ///
    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    /// Switch between the clock and calendar views.
    ///
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.dirty = true;
    }

    /// Toggle between 24h and 12h time display.
    ///
    pub fn toggle_time_format(&mut self) {
        self.use_24h = !self.use_24h;
        self.dirty = true;
    }

    /// Advance to the next palette, wrapping at the end of the cycle.
    ///
    pub fn cycle_palette(&mut self) {
        self.palette_index = (self.palette_index + 1) % PALETTES.len();
        self.dirty = true;
    }

    /// Deactivate all extra timezones.
    ///
    pub fn clear_zones(&mut self) {
        self.active_zones.clear();
        self.dirty = true;
    }

    /// Toggle membership of a timezone table index. Activation is refused
    /// once three zones are active; the set stays sorted ascending.
    ///
    pub fn toggle_zone(&mut self, index: usize) {
        if index >= TIMEZONES.len() {
            return;
        }
        if let Some(position) = self.active_zones.iter().position(|&i| i == index) {
            self.active_zones.remove(position);
        } else if self.active_zones.len() < MAX_ACTIVE_ZONES {
            self.active_zones.push(index);
            self.active_zones.sort_unstable();
        }
        self.dirty = true;
    }

    /// Move the calendar cursor one month back, carrying the year.
    ///
    pub fn previous_month(&mut self) {
        if self.calendar_month == 1 {
            self.calendar_month = 12;
            self.calendar_year -= 1;
        } else {
            self.calendar_month -= 1;
        }
        self.dirty = true;
    }

    /// Move the calendar cursor one month forward, carrying the year.
    ///
    pub fn next_month(&mut self) {
        if self.calendar_month == 12 {
            self.calendar_month = 1;
            self.calendar_year += 1;
        } else {
            self.calendar_month += 1;
        }
        self.dirty = true;
    }

    pub fn previous_year(&mut self) {
        self.calendar_year -= 1;
        self.dirty = true;
    }

    pub fn next_year(&mut self) {
        self.calendar_year += 1;
        self.dirty = true;
    }

    /// Record the latest reported terminal size. The frame canvas width is
    /// fixed; the size is tracked so a future frame can react to it.
    ///
    pub fn set_terminal_size(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.dirty = true;
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}
