//! Ice Fish - a timed ice fishing game for the terminal.
//!
//! The game core (levels, the fishing session, stats and settings) is
//! independent of the terminal; `app` and `ui` host it with ratatui.

pub mod app;
pub mod build_info;
pub mod core;
pub mod feedback;
pub mod game;
pub mod input;
pub mod launch;
pub mod levels;
pub mod settings;
pub mod stats;
pub mod ui;
pub mod utils;
