//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Browser, InputMode, Message, MessageStyle, Statistics, run_tui};
