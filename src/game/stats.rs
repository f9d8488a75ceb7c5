//! In-memory results across games in one run
//!
//! Nothing here is persisted; a new process starts from zero.

use super::session::{AttemptOutcome, GameState};
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    /// Attempts needed -> number of wins
    pub guess_distribution: BTreeMap<usize, usize>,
}

impl Statistics {
    /// Count a finished game; non-terminal outcomes are ignored
    pub fn record(&mut self, outcome: &AttemptOutcome) {
        match outcome.state {
            GameState::Won => {
                self.games_played += 1;
                self.games_won += 1;
                *self.guess_distribution.entry(outcome.attempt).or_insert(0) += 1;
            }
            GameState::Lost => self.games_played += 1,
            GameState::InProgress => {}
        }
    }

    /// Percentage of games won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }

    /// Mean attempts over won games
    #[must_use]
    pub fn average_attempts(&self) -> Option<f64> {
        if self.games_won == 0 {
            return None;
        }
        let total: usize = self
            .guess_distribution
            .iter()
            .map(|(attempts, count)| attempts * count)
            .sum();
        Some(total as f64 / self.games_won as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Alphabet, SecretCode, Symbol};
    use crate::game::{GameConfig, Session};

    fn finished_game(secret: &str, guesses: &[&str]) -> AttemptOutcome {
        let config = GameConfig::new(4, 3, Alphabet::Numeric);
        let secret = SecretCode::from_symbols(secret.chars().map(Symbol::new).collect());
        let mut session = Session::with_secret(config, secret).unwrap();
        let mut last = None;
        for guess in guesses {
            last = Some(session.submit(guess).unwrap());
        }
        last.unwrap()
    }

    #[test]
    fn empty_statistics() {
        let stats = Statistics::default();
        assert_eq!(stats.win_rate(), 0.0);
        assert_eq!(stats.average_attempts(), None);
    }

    #[test]
    fn records_wins_and_losses() {
        let mut stats = Statistics::default();

        stats.record(&finished_game("1234", &["1234"]));
        stats.record(&finished_game("1234", &["1111", "1234"]));
        stats.record(&finished_game("1234", &["1111", "2222", "3333"]));

        assert_eq!(stats.games_played, 3);
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.guess_distribution.get(&1), Some(&1));
        assert_eq!(stats.guess_distribution.get(&2), Some(&1));
        assert_eq!(stats.average_attempts(), Some(1.5));
        assert!((stats.win_rate() - 66.666).abs() < 0.01);
    }

    #[test]
    fn in_progress_outcomes_are_ignored() {
        let mut stats = Statistics::default();
        stats.record(&finished_game("1234", &["1111"]));
        assert_eq!(stats, Statistics::default());
    }
}
