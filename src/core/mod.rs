//! Core domain types for Mastermind
//!
//! Symbols, alphabets, codes, guess validation and scoring. Everything here is
//! pure: no I/O, and randomness only enters through an explicit `Rng`.

pub mod alphabet;
mod code;
pub mod parser;
mod score;

pub use alphabet::{Alphabet, Symbol};
pub use code::{Guess, SecretCode};
pub use parser::{GuessError, parse_guess, parse_tokens};
pub use score::Score;
