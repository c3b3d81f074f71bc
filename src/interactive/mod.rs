//! Interactive TUI for playing all nine boards by hand

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, Statistics, run_tui};
