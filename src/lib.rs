//! Mastermind
//!
//! The code-breaking game: guess a hidden code of digits, colors, or both,
//! guided by exact and close feedback after every attempt.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Alphabet, SecretCode, Symbol};
//! use mastermind::game::{GameConfig, GameState, Session};
//!
//! let secret = SecretCode::from_symbols("1234".chars().map(Symbol::new).collect());
//! let mut session = Session::with_secret(GameConfig::default(), secret).unwrap();
//!
//! let outcome = session.submit("1243").unwrap();
//! assert_eq!((outcome.score.exact(), outcome.score.present()), (2, 2));
//!
//! let outcome = session.submit("1234").unwrap();
//! assert_eq!(outcome.state, GameState::Won);
//! assert_eq!(session.alphabet(), Alphabet::Numeric);
//! ```

// Core domain types
pub mod core;

// Sessions, configuration and statistics
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
