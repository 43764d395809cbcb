//! Application driver: terminal lifecycle and the render loop.

use crate::events::terminal::Handler as TerminalEventHandler;
use crate::state::State;
use crate::ui::{self, BigFont};
use anyhow::Result;
use crossterm::{
    cursor::{Hide, Show},
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    style::{Attribute, ResetColor, SetAttribute},
    terminal::{
        self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use log::*;
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// A frame is re-emitted at least this often even without state changes, so
/// the seconds on the clock face keep moving.
///
const FRAME_INTERVAL: Duration = Duration::from_secs(1);

/// Fallback size when the startup size query fails.
///
const DEFAULT_TERMINAL_SIZE: (u16, u16) = (80, 24);

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: State,
    font: BigFont,
}

impl App {
    /// Start the application and run it until an exit is requested. Returns
    /// the result of the application execution.
    ///
    pub fn start() -> Result<()> {
        crate::logger::init()?;
        info!("Starting application...");

        let mut app = App {
            state: State::new(),
            font: BigFont::new()?,
        };
        let (width, height) = terminal::size().unwrap_or(DEFAULT_TERMINAL_SIZE);
        app.state.set_terminal_size(width, height);
        app.run()?;

        info!("Exiting application...");
        Ok(())
    }

    /// Acquire the terminal, then drive the render loop: emit a frame when
    /// the state is dirty or once per second, and drain one terminal event
    /// per iteration. The guard restores the terminal on every exit path,
    /// including panics and propagated errors.
    ///
    fn run(&mut self) -> Result<()> {
        let _guard = TerminalGuard::acquire()?;
        let handler = TerminalEventHandler::new();
        let mut last_frame = Instant::now();

        loop {
            if self.state.is_dirty() || last_frame.elapsed() >= FRAME_INTERVAL {
                self.draw()?;
                self.state.clear_dirty();
                last_frame = Instant::now();
            }
            if !handler.handle_next(&mut self.state)? {
                debug!("Received application exit request.");
                break;
            }
        }

        Ok(())
    }

    /// Compose the current frame and emit it as a single atomic write.
    ///
    fn draw(&mut self) -> Result<()> {
        let frame = ui::compose(&self.state, &mut self.font);
        let mut buffer = Vec::with_capacity(8 * 1024);
        frame.write_to(&mut buffer, self.state.theme())?;

        let mut stdout = io::stdout();
        stdout.write_all(&buffer)?;
        stdout.flush()?;
        Ok(())
    }
}

/// Scoped terminal acquisition: raw mode, alternate screen, hidden cursor,
/// and mouse reporting, all released in `Drop`.
///
struct TerminalGuard;

impl TerminalGuard {
    fn acquire() -> Result<Self> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, Hide, EnableMouseCapture)?;
        enable_raw_mode()?;
        Ok(TerminalGuard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Restoration must run to completion even if a single step fails.
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(
            stdout,
            SetAttribute(Attribute::Reset),
            ResetColor,
            Show,
            DisableMouseCapture,
            LeaveAlternateScreen,
        );
    }
}
