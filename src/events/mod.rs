//! Event handling module.
//!
//! This module contains the terminal event handler: a polling thread that
//! forwards keystrokes, resize notifications, and ticks to the render loop,
//! and the keystroke-to-transition table applied to application state.

pub mod terminal;
