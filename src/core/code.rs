//! Secret codes and guesses
//!
//! Both are ordered symbol sequences. A [`SecretCode`] is generated once per
//! session and never changes; a [`Guess`] only exists after successful
//! validation (see [`crate::core::parser`]).

use super::{Alphabet, Symbol};
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fmt;

/// The hidden code the player is trying to break
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SecretCode {
    symbols: Vec<Symbol>,
}

impl SecretCode {
    /// Generate a random code of `length` symbols from `alphabet`
    ///
    /// Each position is drawn independently. For [`Alphabet::Mixed`] a fair coin
    /// first picks the numeric or the color subset, then a symbol is picked
    /// uniformly within it.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Alphabet, SecretCode};
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let code = SecretCode::generate(4, Alphabet::Mixed, &mut rng);
    /// assert_eq!(code.len(), 4);
    /// assert!(code.symbols().iter().all(|&s| Alphabet::Mixed.contains(s)));
    /// ```
    #[must_use]
    pub fn generate<R: Rng + ?Sized>(length: usize, alphabet: Alphabet, rng: &mut R) -> Self {
        let subsets = alphabet.subsets();

        let symbols = (0..length)
            .map(|_| {
                // Mixed: coin flip between the two halves before picking a symbol
                let subset = if subsets.len() > 1 && rng.random_bool(0.5) {
                    subsets[1]
                } else {
                    subsets[0]
                };
                *subset.choose(rng).expect("alphabet subsets are never empty")
            })
            .collect();

        Self { symbols }
    }

    /// Build a code from known symbols
    ///
    /// Used for replaying a fixed code. No alphabet check is made.
    #[must_use]
    pub fn from_symbols(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }

    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl fmt::Display for SecretCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_spaced(f, &self.symbols)
    }
}

/// A validated player guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Guess {
    symbols: Vec<Symbol>,
}

impl Guess {
    /// Only the parser constructs guesses, so every `Guess` is fully valid.
    pub(crate) fn new(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }

    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Whether this guess is symbol-for-symbol equal to `secret`
    #[must_use]
    pub fn matches(&self, secret: &SecretCode) -> bool {
        self.symbols == secret.symbols()
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_spaced(f, &self.symbols)
    }
}

fn write_spaced(f: &mut fmt::Formatter<'_>, symbols: &[Symbol]) -> fmt::Result {
    for (i, symbol) in symbols.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{symbol}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alphabet::{COLOR_SYMBOLS, NUMERIC_SYMBOLS};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generated_code_has_requested_length() {
        let mut rng = StdRng::seed_from_u64(1);
        for length in [1, 4, 5, 12] {
            for alphabet in Alphabet::ALL {
                let code = SecretCode::generate(length, alphabet, &mut rng);
                assert_eq!(code.len(), length);
            }
        }
    }

    #[test]
    fn generated_symbols_belong_to_alphabet() {
        let mut rng = StdRng::seed_from_u64(2);
        for alphabet in Alphabet::ALL {
            for _ in 0..200 {
                let code = SecretCode::generate(4, alphabet, &mut rng);
                assert!(
                    code.symbols().iter().all(|&s| alphabet.contains(s)),
                    "{code} contains a symbol outside {alphabet}"
                );
            }
        }
    }

    #[test]
    fn mixed_codes_draw_from_both_subsets() {
        let mut rng = StdRng::seed_from_u64(3);
        let code = SecretCode::generate(400, Alphabet::Mixed, &mut rng);

        let numeric = code.symbols().iter().filter(|s| s.is_numeric()).count();
        let color = code.symbols().iter().filter(|s| s.is_color()).count();

        assert_eq!(numeric + color, 400);
        // Coin flip per position: both halves land well away from zero
        assert!(numeric > 120, "only {numeric} numeric symbols");
        assert!(color > 120, "only {color} color symbols");
    }

    #[test]
    fn single_mode_codes_use_every_symbol_eventually() {
        let mut rng = StdRng::seed_from_u64(4);
        let code = SecretCode::generate(300, Alphabet::Color, &mut rng);
        for symbol in COLOR_SYMBOLS {
            assert!(code.symbols().contains(&symbol), "never drew {symbol}");
        }

        let code = SecretCode::generate(300, Alphabet::Numeric, &mut rng);
        for symbol in NUMERIC_SYMBOLS {
            assert!(code.symbols().contains(&symbol), "never drew {symbol}");
        }
    }

    #[test]
    fn same_seed_same_code() {
        let a = SecretCode::generate(6, Alphabet::Mixed, &mut StdRng::seed_from_u64(99));
        let b = SecretCode::generate(6, Alphabet::Mixed, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn display_is_space_separated() {
        let code = SecretCode::from_symbols(vec![
            Symbol::new('1'),
            Symbol::new('r'),
            Symbol::new('6'),
            Symbol::new('o'),
        ]);
        assert_eq!(code.to_string(), "1 R 6 O");
    }

    #[test]
    fn guess_matches_secret() {
        let symbols = vec![Symbol::new('1'), Symbol::new('2')];
        let secret = SecretCode::from_symbols(symbols.clone());
        assert!(Guess::new(symbols).matches(&secret));
        assert!(!Guess::new(vec![Symbol::new('2'), Symbol::new('1')]).matches(&secret));
    }
}
