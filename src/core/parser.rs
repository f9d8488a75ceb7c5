//! Guess parsing and validation
//!
//! Raw input arrives either as a string (one character per symbol) or as a list
//! of tokens from incremental entry. Both go through the same checks:
//! 1. Case folding to canonical form
//! 2. Length must equal the code length
//! 3. Every symbol must belong to the active alphabet
//!
//! Parsing is all-or-nothing: either a complete [`Guess`] comes back or an error.

use super::{Alphabet, Guess, Symbol};
use thiserror::Error;

/// Reasons a guess is rejected
///
/// Positions are 0-based; messages count from 1.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Invalid guess length: expected {expected} symbols, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Invalid symbol '{token}' at position {}: use {}", .position + 1, .alphabet.hint())]
    InvalidSymbol {
        token: String,
        position: usize,
        alphabet: Alphabet,
    },
}

/// Parse a guess typed as a single string
///
/// Surrounding whitespace is trimmed; every remaining character is one symbol,
/// so `"1 2 3 4"` has seven symbols and fails the length check.
///
/// # Errors
/// Returns [`GuessError::InvalidLength`] if the symbol count differs from
/// `expected_length`, or [`GuessError::InvalidSymbol`] for the first symbol not
/// in `alphabet`.
///
/// # Examples
/// ```
/// use mastermind::core::{Alphabet, GuessError, parse_guess};
///
/// let guess = parse_guess("rgby", 4, Alphabet::Color).unwrap();
/// assert_eq!(guess.to_string(), "R G B Y");
///
/// assert!(matches!(
///     parse_guess("123", 4, Alphabet::Numeric),
///     Err(GuessError::InvalidLength { expected: 4, actual: 3 })
/// ));
/// ```
pub fn parse_guess(
    input: &str,
    expected_length: usize,
    alphabet: Alphabet,
) -> Result<Guess, GuessError> {
    let symbols: Vec<Symbol> = input.trim().chars().map(Symbol::new).collect();

    validate(symbols, expected_length, alphabet)
}

/// Parse a guess built from individual tokens
///
/// Each token must hold exactly one symbol character once trimmed.
///
/// # Errors
/// Same as [`parse_guess`]; a token with more or fewer than one character is an
/// [`GuessError::InvalidSymbol`].
pub fn parse_tokens<S: AsRef<str>>(
    tokens: &[S],
    expected_length: usize,
    alphabet: Alphabet,
) -> Result<Guess, GuessError> {
    if tokens.len() != expected_length {
        return Err(GuessError::InvalidLength {
            expected: expected_length,
            actual: tokens.len(),
        });
    }

    let symbols = tokens
        .iter()
        .enumerate()
        .map(|(position, token)| {
            let token = token.as_ref().trim();
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Ok(Symbol::new(ch)),
                _ => Err(GuessError::InvalidSymbol {
                    token: token.to_string(),
                    position,
                    alphabet,
                }),
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    validate(symbols, expected_length, alphabet)
}

fn validate(
    symbols: Vec<Symbol>,
    expected_length: usize,
    alphabet: Alphabet,
) -> Result<Guess, GuessError> {
    if symbols.len() != expected_length {
        return Err(GuessError::InvalidLength {
            expected: expected_length,
            actual: symbols.len(),
        });
    }

    if let Some((position, symbol)) = symbols
        .iter()
        .enumerate()
        .find(|&(_, &symbol)| !alphabet.contains(symbol))
    {
        return Err(GuessError::InvalidSymbol {
            token: symbol.to_string(),
            position,
            alphabet,
        });
    }

    Ok(Guess::new(symbols))
}
