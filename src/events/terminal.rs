//! Terminal event handling and the input state machine.

use crate::state::{Mode, State};
use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 50;

/// Fallback terminal size when a reported size is unusable.
///
const DEFAULT_SIZE: (u16, u16) = (80, 24);

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event {
    Input(KeyEvent),
    Resize(u16, u16),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event>,
    _tx: mpsc::Sender<Event>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread. Resize
    /// notifications arrive through the same channel as keystrokes, so the
    /// render loop is the only writer of terminal dimensions.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(CrosstermEvent::Key(key)) => {
                        if tx_clone.send(Event::Input(key)).is_err() {
                            break;
                        }
                    }
                    Ok(CrosstermEvent::Resize(width, height)) => {
                        if tx_clone.send(Event::Resize(width, height)).is_err() {
                            break;
                        }
                    }
                    Ok(_) => {}
                    // Undecodable input is dropped; the loop keeps polling.
                    Err(e) => debug!("Discarding unreadable terminal event: {}", e),
                },
                Ok(false) => {}
                Err(e) => debug!("Terminal event poll failed: {}", e),
            }
            if tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(key) => Ok(process_key(state, key)),
            Event::Resize(width, height) => {
                let (width, height) = if width == 0 || height == 0 {
                    DEFAULT_SIZE
                } else {
                    (width, height)
                };
                debug!("Terminal resized to {}x{}", width, height);
                state.set_terminal_size(width, height);
                Ok(true)
            }
            Event::Tick => Ok(true),
        }
    }
}

/// Apply one keystroke to the state. Returns false when the keystroke
/// requests application exit. Unrecognized keys leave the state untouched.
///
pub fn process_key(state: &mut State, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        return true;
    }
    match key.code {
        KeyCode::Tab => state.toggle_mode(),
        KeyCode::Char('t') => state.toggle_time_format(),
        KeyCode::Char('c') => state.cycle_palette(),
        KeyCode::Char('0') => state.clear_zones(),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            state.toggle_zone(index);
        }
        KeyCode::Char('h') if state.mode() == Mode::Calendar => state.previous_month(),
        KeyCode::Char('l') if state.mode() == Mode::Calendar => state.next_month(),
        KeyCode::Char('j') if state.mode() == Mode::Calendar => state.previous_year(),
        KeyCode::Char('k') if state.mode() == Mode::Calendar => state.next_year(),
        _ => {}
    }
    true
}
