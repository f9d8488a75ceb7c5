//! Text console game
//!
//! Line-based front end: pick a mode, type guesses, read the feedback.

use crate::core::Alphabet;
use crate::game::{AttemptOutcome, GameConfig, GameState, Session, SessionError, Statistics};
use crate::output::{
    print_banner, print_feedback, print_instructions, print_loss, print_mode_menu,
    print_statistics, print_win,
};
use anyhow::Result;
use colored::Colorize;
use rand::rngs::StdRng;
use std::io::{BufRead, Write};
use tracing::debug;

/// How a single game ended from the console's point of view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEnd {
    /// The session reached `Won` or `Lost`
    Finished(AttemptOutcome),
    /// The player quit or input ran out mid-game
    Quit,
}

/// Console front end over any line source and output sink
pub struct Console<R, W> {
    input: R,
    output: W,
    rng: StdRng,
    stats: Statistics,
}

impl<R: BufRead, W: Write> Console<R, W> {
    #[must_use]
    pub fn new(input: R, output: W, rng: StdRng) -> Self {
        Self {
            input,
            output,
            rng,
            stats: Statistics::default(),
        }
    }

    /// Results of the games played so far
    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    /// Consume the console and hand back the output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run games until the player quits
    ///
    /// With `mode` set the mode menu is skipped until the player asks for it.
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure or an invalid configuration.
    pub fn run(&mut self, config: GameConfig, mode: Option<Alphabet>) -> Result<()> {
        print_banner(&mut self.output)?;

        let mut mode = mode;
        loop {
            let alphabet = match mode {
                Some(alphabet) => alphabet,
                None => match self.select_mode()? {
                    Some(alphabet) => alphabet,
                    None => break,
                },
            };
            mode = Some(alphabet);

            let mut session = Session::new(config.with_alphabet(alphabet), &mut self.rng)?;
            if self.play(&mut session)? == GameEnd::Quit {
                break;
            }

            match self.prompt("Play again? (y)es / (m)ode / (q)uit")? {
                Some(answer) => match answer.to_lowercase().as_str() {
                    "y" | "yes" => {}
                    "m" | "mode" => mode = None,
                    _ => break,
                },
                None => break,
            }
        }

        print_statistics(&mut self.output, &self.stats)?;
        writeln!(self.output, "\n👋 Thanks for playing!\n")?;
        Ok(())
    }

    /// Play one session to the end
    ///
    /// Invalid guesses are reported and re-prompted without using an attempt.
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure.
    pub fn play(&mut self, session: &mut Session) -> Result<GameEnd> {
        let code_length = session.code_length();
        let max_attempts = session.max_attempts();
        print_instructions(&mut self.output, session.alphabet(), code_length, max_attempts)?;

        loop {
            let prompt = format!("Attempt {}", session.attempts_used() + 1);
            let Some(line) = self.prompt(&prompt)? else {
                return Ok(GameEnd::Quit);
            };

            if matches!(line.to_lowercase().as_str(), "quit" | "exit") {
                return Ok(GameEnd::Quit);
            }

            match session.submit(&line) {
                Ok(outcome) => {
                    match outcome.state {
                        GameState::InProgress => {
                            print_feedback(&mut self.output, &outcome, code_length, max_attempts)?;
                            continue;
                        }
                        GameState::Won => {
                            if let Some(secret) = &outcome.secret {
                                print_win(&mut self.output, secret, outcome.attempt)?;
                            }
                        }
                        GameState::Lost => {
                            print_feedback(&mut self.output, &outcome, code_length, max_attempts)?;
                            if let Some(secret) = &outcome.secret {
                                print_loss(&mut self.output, secret)?;
                            }
                        }
                    }
                    self.stats.record(&outcome);
                    return Ok(GameEnd::Finished(outcome));
                }
                Err(SessionError::Guess(e)) => {
                    writeln!(self.output, "{} {e}", "❌".red())?;
                }
                Err(e @ SessionError::GameOver(_)) => {
                    // A finished session never reaches the prompt loop
                    debug!(error = %e, "Submitted to a finished session");
                    return Ok(GameEnd::Quit);
                }
            }
        }
    }

    fn select_mode(&mut self) -> Result<Option<Alphabet>> {
        loop {
            print_mode_menu(&mut self.output)?;
            let Some(choice) = self.prompt("Mode")? else {
                return Ok(None);
            };
            if matches!(choice.to_lowercase().as_str(), "quit" | "q" | "exit") {
                return Ok(None);
            }
            if let Some(alphabet) = Alphabet::from_menu_choice(&choice) {
                return Ok(Some(alphabet));
            }
            writeln!(self.output, "Please enter 1, 2 or 3.\n")?;
        }
    }

    /// Read one trimmed line; `None` at end of input
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
