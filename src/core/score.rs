//! Guess scoring
//!
//! A score is the pair (exact, present):
//! - exact: same symbol in the same position
//! - present: symbol occurs at another, still unmatched position of the secret
//!
//! Every secret position backs at most one match, so
//! `exact + present <= length` always holds.

use super::{Guess, SecretCode};
use std::fmt;

/// Feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    exact: usize,
    present: usize,
}

impl Score {
    #[inline]
    #[must_use]
    pub const fn new(exact: usize, present: usize) -> Self {
        Self { exact, present }
    }

    /// Symbols in the right position
    #[inline]
    #[must_use]
    pub const fn exact(self) -> usize {
        self.exact
    }

    /// Right symbols in the wrong position
    #[inline]
    #[must_use]
    pub const fn present(self) -> usize {
        self.present
    }

    /// Whether the guess cracked a code of `length` symbols
    #[inline]
    #[must_use]
    pub const fn is_perfect(self, length: usize) -> bool {
        self.exact == length
    }

    /// Score `guess` against `secret`
    ///
    /// Both must have the same length; the session guarantees this through
    /// parsing.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches as consumed on both sides
    /// 2. Second pass: for each unconsumed guess position, left to right, take the
    ///    first unconsumed secret position holding the same symbol
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Alphabet, Score, SecretCode, parse_guess};
    ///
    /// let secret = SecretCode::from_symbols(
    ///     parse_guess("1122", 4, Alphabet::Numeric).unwrap().symbols().to_vec(),
    /// );
    /// let guess = parse_guess("1223", 4, Alphabet::Numeric).unwrap();
    ///
    /// // Positions 0 and 2 are exact, the 2 at position 1 finds the last 2
    /// assert_eq!(Score::calculate(&secret, &guess), Score::new(2, 1));
    /// ```
    #[must_use]
    pub fn calculate(secret: &SecretCode, guess: &Guess) -> Self {
        let secret = secret.symbols();
        let guess = guess.symbols();
        debug_assert_eq!(
            secret.len(),
            guess.len(),
            "secret and guess must have the same length"
        );

        let mut secret_used = vec![false; secret.len()];
        let mut guess_used = vec![false; guess.len()];
        let mut exact = 0;
        let mut present = 0;

        // First pass: exact position matches
        for (i, (s, g)) in secret.iter().zip(guess).enumerate() {
            if s == g {
                exact += 1;
                secret_used[i] = true;
                guess_used[i] = true;
            }
        }

        // Second pass: first unused secret position with the same symbol wins
        for (i, g) in guess.iter().enumerate() {
            if guess_used[i] {
                continue;
            }

            let hit = secret
                .iter()
                .enumerate()
                .position(|(j, s)| !secret_used[j] && s == g);

            if let Some(j) = hit {
                present += 1;
                secret_used[j] = true;
                guess_used[i] = true;
            }
        }

        Self { exact, present }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Correct: {}, Close: {}", self.exact, self.present)
    }
}
