//! Game sessions
//!
//! Configuration, the attempt state machine, and per-run statistics.

pub mod config;
pub mod session;
pub mod stats;

pub use config::{ConfigError, DEFAULT_CODE_LENGTH, DEFAULT_MAX_ATTEMPTS, GameConfig};
pub use session::{AttemptOutcome, GameState, Session, SessionError};
pub use stats::Statistics;
