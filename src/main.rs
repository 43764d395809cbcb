//! A retro full-screen terminal clock and calendar.

mod app;
mod error;
mod events;
mod logger;
mod state;
mod ui;
mod zones;

use anyhow::Result;
use app::App;

fn main() -> Result<()> {
    App::start()
}
