//! Game session state machine
//!
//! A session owns one secret code and counts attempts against a fixed budget:
//!
//! ```text
//! InProgress --exact == length--------------------> Won
//! InProgress --attempts_used == max_attempts------> Lost
//! InProgress --invalid guess----------------------> InProgress (no attempt used)
//! ```
//!
//! `Won` and `Lost` are terminal. [`Session::restart`] starts over with a fresh
//! secret; changing mode means building a new session.

use super::config::{ConfigError, GameConfig};
use crate::core::{Alphabet, Guess, GuessError, Score, SecretCode, parse_guess, parse_tokens};
use rand::Rng;
use std::fmt;
use thiserror::Error;
use tracing::{debug, info, trace};

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

/// Errors from submitting an attempt
///
/// None of these consume an attempt or change the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Guess(#[from] GuessError),

    #[error("The game is already {0}; start a new game to keep playing")]
    GameOver(GameState),
}

/// Result of one scored attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptOutcome {
    pub guess: Guess,
    pub score: Score,
    pub state: GameState,
    /// 1-based number of this attempt
    pub attempt: usize,
    /// The secret, revealed only once the game is over
    pub secret: Option<SecretCode>,
}

/// One play-through from secret generation to a win or loss
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    secret: SecretCode,
    attempts_used: usize,
    state: GameState,
}

impl Session {
    /// Start a session with a freshly generated secret
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if the code length or attempt budget is zero.
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self, ConfigError> {
        config.validate()?;
        let secret = SecretCode::generate(config.code_length, config.alphabet, rng);
        Ok(Self::start(config, secret))
    }

    /// Start a session with a known secret
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if the configuration is invalid or the secret
    /// does not fit it.
    pub fn with_secret(config: GameConfig, secret: SecretCode) -> Result<Self, ConfigError> {
        config.validate()?;
        if secret.len() != config.code_length {
            return Err(ConfigError::SecretLength {
                expected: config.code_length,
                actual: secret.len(),
            });
        }
        if let Some(&symbol) = secret
            .symbols()
            .iter()
            .find(|&&s| !config.alphabet.contains(s))
        {
            return Err(ConfigError::SecretSymbol {
                symbol: symbol.as_char(),
                alphabet: config.alphabet,
            });
        }
        Ok(Self::start(config, secret))
    }

    fn start(config: GameConfig, secret: SecretCode) -> Self {
        debug!(
            code_length = config.code_length,
            max_attempts = config.max_attempts,
            alphabet = %config.alphabet,
            "New session"
        );
        trace!(secret = %secret, "Secret generated");

        Self {
            config,
            secret,
            attempts_used: 0,
            state: GameState::InProgress,
        }
    }

    /// Submit a guess typed as a string
    ///
    /// # Errors
    /// [`SessionError::Guess`] if the input fails validation,
    /// [`SessionError::GameOver`] if the session already ended. Neither uses up
    /// an attempt.
    pub fn submit(&mut self, input: &str) -> Result<AttemptOutcome, SessionError> {
        self.ensure_in_progress()?;
        let guess = parse_guess(input, self.config.code_length, self.config.alphabet)
            .inspect_err(|e| debug!(error = %e, "Rejected guess"))?;
        Ok(self.record(guess))
    }

    /// Submit a guess assembled symbol by symbol
    ///
    /// # Errors
    /// Same as [`Session::submit`].
    pub fn submit_tokens<S: AsRef<str>>(
        &mut self,
        tokens: &[S],
    ) -> Result<AttemptOutcome, SessionError> {
        self.ensure_in_progress()?;
        let guess = parse_tokens(tokens, self.config.code_length, self.config.alphabet)
            .inspect_err(|e| debug!(error = %e, "Rejected guess"))?;
        Ok(self.record(guess))
    }

    fn ensure_in_progress(&self) -> Result<(), SessionError> {
        if self.state.is_terminal() {
            return Err(SessionError::GameOver(self.state));
        }
        Ok(())
    }

    fn record(&mut self, guess: Guess) -> AttemptOutcome {
        self.attempts_used += 1;
        let score = Score::calculate(&self.secret, &guess);

        if score.is_perfect(self.config.code_length) {
            self.state = GameState::Won;
            info!(attempts = self.attempts_used, "Code cracked");
        } else if self.attempts_used >= self.config.max_attempts {
            self.state = GameState::Lost;
            info!(attempts = self.attempts_used, "Out of attempts");
        } else {
            debug!(
                attempt = self.attempts_used,
                exact = score.exact(),
                present = score.present(),
                "Scored guess"
            );
        }

        AttemptOutcome {
            guess,
            score,
            state: self.state,
            attempt: self.attempts_used,
            secret: self.revealed_secret().cloned(),
        }
    }

    /// Throw away the current secret and attempts and play again
    ///
    /// Configuration is kept; to change mode build a new session.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let secret = SecretCode::generate(self.config.code_length, self.config.alphabet, rng);
        *self = Self::start(self.config, secret);
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn alphabet(&self) -> Alphabet {
        self.config.alphabet
    }

    #[inline]
    #[must_use]
    pub const fn code_length(&self) -> usize {
        self.config.code_length
    }

    #[inline]
    #[must_use]
    pub const fn attempts_used(&self) -> usize {
        self.attempts_used
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.config.max_attempts
    }

    #[inline]
    #[must_use]
    pub const fn attempts_remaining(&self) -> usize {
        self.config.max_attempts.saturating_sub(self.attempts_used)
    }

    /// The secret, once the game is over
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&SecretCode> {
        self.state.is_terminal().then_some(&self.secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Symbol;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn code(text: &str) -> SecretCode {
        SecretCode::from_symbols(text.chars().map(Symbol::new).collect())
    }

    fn session(secret: &str) -> Session {
        Session::with_secret(GameConfig::default(), code(secret)).unwrap()
    }

    #[test]
    fn new_session_starts_in_progress() {
        let mut rng = StdRng::seed_from_u64(5);
        let session = Session::new(GameConfig::default(), &mut rng).unwrap();

        assert_eq!(session.state(), GameState::InProgress);
        assert_eq!(session.attempts_used(), 0);
        assert_eq!(session.attempts_remaining(), 10);
        assert!(session.revealed_secret().is_none());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut rng = StdRng::seed_from_u64(5);
        let config = GameConfig::new(0, 10, Alphabet::Numeric);
        assert_eq!(
            Session::new(config, &mut rng).unwrap_err(),
            ConfigError::ZeroLength
        );
    }

    #[test]
    fn secret_must_fit_config() {
        assert_eq!(
            Session::with_secret(GameConfig::default(), code("123")).unwrap_err(),
            ConfigError::SecretLength {
                expected: 4,
                actual: 3
            }
        );
        assert_eq!(
            Session::with_secret(GameConfig::default(), code("12R4")).unwrap_err(),
            ConfigError::SecretSymbol {
                symbol: 'R',
                alphabet: Alphabet::Numeric
            }
        );
    }

    #[test]
    fn scoring_attempt_stays_in_progress() {
        let mut session = session("1234");
        let outcome = session.submit("1243").unwrap();

        assert_eq!(outcome.score, Score::new(2, 2));
        assert_eq!(outcome.state, GameState::InProgress);
        assert_eq!(outcome.attempt, 1);
        assert!(outcome.secret.is_none());
        assert_eq!(session.attempts_used(), 1);
    }

    #[test]
    fn exact_guess_wins_and_reveals_secret() {
        let mut session = session("6152");
        session.submit("1111").unwrap();
        let outcome = session.submit("6152").unwrap();

        assert_eq!(outcome.state, GameState::Won);
        assert_eq!(outcome.score, Score::new(4, 0));
        assert_eq!(outcome.attempt, 2);
        assert_eq!(outcome.secret, Some(code("6152")));
        assert_eq!(session.state(), GameState::Won);
    }

    #[test]
    fn invalid_guess_does_not_use_an_attempt() {
        let mut session = session("1234");

        let err = session.submit("12").unwrap_err();
        assert!(matches!(
            err,
            SessionError::Guess(GuessError::InvalidLength { .. })
        ));

        let err = session.submit("1239").unwrap_err();
        assert!(matches!(
            err,
            SessionError::Guess(GuessError::InvalidSymbol { .. })
        ));

        assert_eq!(session.attempts_used(), 0);
        assert_eq!(session.state(), GameState::InProgress);
    }

    #[test]
    fn running_out_of_attempts_loses() {
        let config = GameConfig::new(4, 3, Alphabet::Numeric);
        let secret = code("4444");
        let mut session = Session::with_secret(config, secret.clone()).unwrap();

        assert_eq!(session.submit("1111").unwrap().state, GameState::InProgress);
        assert_eq!(session.submit("2222").unwrap().state, GameState::InProgress);

        let last = session.submit("3333").unwrap();
        assert_eq!(last.state, GameState::Lost);
        assert_eq!(last.secret, Some(secret.clone()));
        assert_eq!(session.revealed_secret(), Some(&secret));
        assert_eq!(session.attempts_remaining(), 0);
    }

    #[test]
    fn winning_on_the_last_attempt_is_a_win() {
        let config = GameConfig::new(4, 1, Alphabet::Numeric);
        let mut session = Session::with_secret(config, code("1234")).unwrap();
        assert_eq!(session.submit("1234").unwrap().state, GameState::Won);
    }

    #[test]
    fn terminal_session_rejects_further_attempts() {
        let mut session = session("1234");
        session.submit("1234").unwrap();

        assert_eq!(
            session.submit("1111").unwrap_err(),
            SessionError::GameOver(GameState::Won)
        );
        assert_eq!(session.attempts_used(), 1);
    }

    #[test]
    fn tokens_and_text_score_the_same() {
        let config = GameConfig::default().with_alphabet(Alphabet::Mixed);
        let mut by_text = Session::with_secret(config, code("1R2G")).unwrap();
        let mut by_tokens = by_text.clone();

        let a = by_text.submit("g21r").unwrap();
        let b = by_tokens.submit_tokens(&["G", "2", "1", "R"]).unwrap();
        assert_eq!(a.score, b.score);
        assert_eq!(a.score, Score::new(0, 4));
    }

    #[test]
    fn restart_resets_attempts_and_secret() {
        let mut rng = StdRng::seed_from_u64(21);
        let config = GameConfig::new(8, 2, Alphabet::Mixed);
        let mut session = Session::new(config, &mut rng).unwrap();

        session.submit("11111111").unwrap();
        let outcome = session.submit("22222222").unwrap();
        let first_secret = outcome.secret.expect("lost game reveals the secret");

        session.restart(&mut rng);
        assert_eq!(session.state(), GameState::InProgress);
        assert_eq!(session.attempts_used(), 0);
        assert_eq!(session.config(), &config);

        // Play the new game out to see its secret
        session.submit("11111111").unwrap();
        let second = session.submit("22222222").unwrap();
        let second_secret = second.secret.unwrap();
        assert_eq!(second_secret.len(), 8);
        assert_ne!(first_secret, second_secret);
    }
}
