//! Interactive TUI interface

pub mod app;
pub mod rendering;

pub use app::{App, Focus, Message, MessageStyle, run_tui};
