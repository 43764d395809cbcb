//! Color palettes for the frame writer.
//!
//! Each palette is a single foreground/background pair applied to every
//! line of the frame. Cycling order is the order of the `PALETTES` table.

use crossterm::style::Color;

/// Color specification as an RGB triple.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }
}

/// A named foreground/background pair.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub fg: ColorSpec,
    pub bg: ColorSpec,
}

/// Palette cycle, in order. All palettes render on a black background.
///
pub const PALETTES: [Theme; 8] = [
    Theme {
        name: "red",
        fg: ColorSpec::new(255, 80, 80),
        bg: ColorSpec::new(0, 0, 0),
    },
    Theme {
        name: "amber",
        fg: ColorSpec::new(255, 180, 0),
        bg: ColorSpec::new(0, 0, 0),
    },
    Theme {
        name: "green",
        fg: ColorSpec::new(0, 255, 100),
        bg: ColorSpec::new(0, 0, 0),
    },
    Theme {
        name: "ice_blue",
        fg: ColorSpec::new(120, 220, 255),
        bg: ColorSpec::new(0, 0, 0),
    },
    Theme {
        name: "dark_blue",
        fg: ColorSpec::new(80, 140, 220),
        bg: ColorSpec::new(0, 0, 0),
    },
    Theme {
        name: "dark_green",
        fg: ColorSpec::new(0, 180, 80),
        bg: ColorSpec::new(0, 0, 0),
    },
    Theme {
        name: "grey",
        fg: ColorSpec::new(180, 180, 180),
        bg: ColorSpec::new(0, 0, 0),
    },
    Theme {
        name: "white",
        fg: ColorSpec::new(240, 240, 240),
        bg: ColorSpec::new(0, 0, 0),
    },
];

/// Index of the startup palette (green).
///
pub const DEFAULT_PALETTE: usize = 2;
