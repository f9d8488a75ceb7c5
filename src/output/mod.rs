//! Terminal output formatting
//!
//! Display utilities for the console game and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_banner, print_feedback, print_instructions, print_loss, print_mode_menu,
    print_statistics, print_win,
};
