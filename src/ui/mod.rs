//! User interface module.
//!
//! This module composes and serializes full-screen frames, including:
//! - The `Frame` buffer of fixed-width lines and its escape-sequence writer
//! - Layout primitives (borders, status bar, digital face)
//! - Palette management
//! - Big-font glyph rendering with a bounded cache
//! - View composition (clock and calendar)

mod bigfont;
mod layout;
mod render;
pub mod theme;

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io;
use theme::Theme;

pub use bigfont::BigFont;
pub use render::compose;

/// One complete line of a frame. The text already has its final rendered
/// width; styling is applied when the frame is serialized.
///
pub struct FrameLine {
    pub text: String,
    pub bold: bool,
}

/// One complete rendered screen, built in memory and emitted as a single
/// write.
///
pub struct Frame {
    width: usize,
    lines: Vec<FrameLine>,
}

impl Frame {
    /// Start an empty frame with the given inner width.
    ///
    pub fn new(width: usize) -> Self {
        Frame {
            width,
            lines: Vec::with_capacity(40),
        }
    }

    /// Inner width of the frame, excluding the two border columns.
    ///
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn lines(&self) -> &[FrameLine] {
        &self.lines
    }

    pub(crate) fn push(&mut self, text: String) {
        self.lines.push(FrameLine { text, bold: false });
    }

    pub(crate) fn push_bold(&mut self, text: String) {
        self.lines.push(FrameLine { text, bold: true });
    }

    /// Serialize the frame: cursor home, full clear, then every line wrapped
    /// in the palette colors with a style reset at the end. Writing into an
    /// in-memory buffer first keeps the terminal write atomic.
    ///
    pub fn write_to<W: io::Write>(&self, out: &mut W, theme: &Theme) -> io::Result<()> {
        queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
        for line in &self.lines {
            queue!(
                out,
                SetBackgroundColor(theme.bg.to_color()),
                SetForegroundColor(theme.fg.to_color()),
            )?;
            if line.bold {
                queue!(out, SetAttribute(Attribute::Bold))?;
            }
            queue!(
                out,
                Print(line.text.as_str()),
                SetAttribute(Attribute::Reset),
                Print("\r\n"),
            )?;
        }
        Ok(())
    }
}
