//! Interactive TUI interface
//!
//! Keyboard-driven board with a symbol palette, built on ratatui.

mod app;
pub mod buffer;
mod rendering;

pub use app::{App, HistoryEntry, Message, MessageStyle, Screen, run_tui};
pub use buffer::GuessBuffer;
