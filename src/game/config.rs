//! Session configuration

use crate::core::Alphabet;
use thiserror::Error;

/// Default number of symbols in a code
pub const DEFAULT_CODE_LENGTH: usize = 4;

/// Default attempt budget
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Invalid configuration values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("code length must be at least 1")]
    ZeroLength,

    #[error("attempt budget must be at least 1")]
    ZeroAttempts,

    #[error("secret has {actual} symbols but the code length is {expected}")]
    SecretLength { expected: usize, actual: usize },

    #[error("secret symbol '{symbol}' is not part of {alphabet}")]
    SecretSymbol { symbol: char, alphabet: Alphabet },
}

/// Settings fixed for the lifetime of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub code_length: usize,
    pub max_attempts: usize,
    pub alphabet: Alphabet,
}

impl GameConfig {
    #[must_use]
    pub const fn new(code_length: usize, max_attempts: usize, alphabet: Alphabet) -> Self {
        Self {
            code_length,
            max_attempts,
            alphabet,
        }
    }

    /// Same settings with a different alphabet
    #[must_use]
    pub const fn with_alphabet(self, alphabet: Alphabet) -> Self {
        Self { alphabet, ..self }
    }

    /// Check that length and attempt budget are positive
    ///
    /// # Errors
    /// Returns the first zero-valued setting as a [`ConfigError`].
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.code_length == 0 {
            return Err(ConfigError::ZeroLength);
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH, DEFAULT_MAX_ATTEMPTS, Alphabet::Numeric)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        assert_eq!(config.code_length, 4);
        assert_eq!(config.max_attempts, 10);
        assert_eq!(config.alphabet, Alphabet::Numeric);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_values_are_rejected() {
        assert_eq!(
            GameConfig::new(0, 10, Alphabet::Color).validate(),
            Err(ConfigError::ZeroLength)
        );
        assert_eq!(
            GameConfig::new(4, 0, Alphabet::Color).validate(),
            Err(ConfigError::ZeroAttempts)
        );
    }

    #[test]
    fn with_alphabet_keeps_other_settings() {
        let config = GameConfig::new(5, 8, Alphabet::Numeric).with_alphabet(Alphabet::Mixed);
        assert_eq!(config, GameConfig::new(5, 8, Alphabet::Mixed));
    }
}
