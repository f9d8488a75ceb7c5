//! Command implementations

pub mod console;

pub use console::{Console, GameEnd};
