//! TUI application state and logic

use super::buffer::GuessBuffer;
use crate::core::{Alphabet, Guess, Score, SecretCode, Symbol};
use crate::game::{AttemptOutcome, GameConfig, GameState, Session, Statistics};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, warn};

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Intro,
    ModeSelect,
    Playing,
    GameOver,
}

/// Application state
pub struct App {
    pub config: GameConfig,
    pub rng: StdRng,
    pub session: Option<Session>,
    pub screen: Screen,
    pub buffer: GuessBuffer,
    pub history: Vec<HistoryEntry>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub mode_cursor: usize,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub guess: Guess,
    pub score: Score,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(config: GameConfig, rng: StdRng) -> Self {
        Self {
            config,
            rng,
            session: None,
            screen: Screen::Intro,
            buffer: GuessBuffer::new(config.code_length),
            history: Vec::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            mode_cursor: 0,
            should_quit: false,
        }
    }

    /// Start a fresh game in `alphabet`, replacing any current session
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn start_game(&mut self, alphabet: Alphabet) -> Result<()> {
        let session = Session::new(self.config.with_alphabet(alphabet), &mut self.rng)?;
        self.begin(session);
        Ok(())
    }

    /// Start a game against a known secret
    ///
    /// # Errors
    ///
    /// Returns an error if the secret does not fit the configuration.
    pub fn start_with_secret(&mut self, alphabet: Alphabet, secret: SecretCode) -> Result<()> {
        let session = Session::with_secret(self.config.with_alphabet(alphabet), secret)?;
        self.begin(session);
        Ok(())
    }

    fn begin(&mut self, session: Session) {
        let alphabet = session.alphabet();
        self.buffer = GuessBuffer::new(session.code_length());
        self.history.clear();
        self.messages.clear();
        self.screen = Screen::Playing;
        self.add_message(
            &format!(
                "You have {} attempts. Good luck!",
                session.max_attempts()
            ),
            MessageStyle::Info,
        );
        self.add_message(
            &format!("Type {} to build a guess", alphabet.hint()),
            MessageStyle::Info,
        );
        self.session = Some(session);
    }

    /// Play again with the same mode
    pub fn restart(&mut self) {
        let Some(mut session) = self.session.take() else {
            self.screen = Screen::ModeSelect;
            return;
        };
        session.restart(&mut self.rng);
        self.begin(session);
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn back_to_mode_select(&mut self) {
        if let Some(alphabet) = self.session.as_ref().map(Session::alphabet) {
            self.mode_cursor = Alphabet::ALL
                .iter()
                .position(|&a| a == alphabet)
                .unwrap_or(0);
        }
        self.messages.clear();
        self.screen = Screen::ModeSelect;
    }

    /// Add a symbol from the palette to the current guess
    pub fn push_symbol(&mut self, ch: char) {
        let Some(session) = &self.session else {
            return;
        };
        let alphabet = session.alphabet();
        let symbol = Symbol::new(ch);

        if !alphabet.contains(symbol) {
            self.add_message(
                &format!("'{ch}' is not in this mode: use {}", alphabet.hint()),
                MessageStyle::Error,
            );
        } else if !self.buffer.push(symbol) {
            self.add_message(
                "Guess is complete - press Enter to submit",
                MessageStyle::Info,
            );
        }
    }

    /// Remove the last symbol from the current guess
    pub fn undo(&mut self) {
        if self.buffer.pop().is_none() {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    /// Submit the current guess to the session
    pub fn submit(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        match session.submit_tokens(&self.buffer.tokens()) {
            Ok(outcome) => {
                self.buffer.clear();
                self.history.push(HistoryEntry {
                    guess: outcome.guess.clone(),
                    score: outcome.score,
                });
                self.finish_attempt(&outcome);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn finish_attempt(&mut self, outcome: &AttemptOutcome) {
        let secret = outcome
            .secret
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();

        match outcome.state {
            GameState::InProgress => {
                self.add_message(&outcome.score.to_string(), MessageStyle::Info);
            }
            GameState::Won => {
                self.stats.record(outcome);
                self.screen = Screen::GameOver;
                self.add_message(
                    &format!("Congratulations! You've cracked the code: {secret}"),
                    MessageStyle::Success,
                );
            }
            GameState::Lost => {
                self.stats.record(outcome);
                self.screen = Screen::GameOver;
                self.add_message(
                    &format!("Game Over! The secret code was: {secret}"),
                    MessageStyle::Error,
                );
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.session
            .as_ref()
            .map_or(self.config.max_attempts, Session::attempts_remaining)
    }

    fn select_mode(&mut self, alphabet: Alphabet) {
        if let Err(e) = self.start_game(alphabet) {
            warn!(error = %e, "Could not start game");
            self.add_message(&e.to_string(), MessageStyle::Error);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Intro => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => self.screen = Screen::ModeSelect,
                KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            Screen::ModeSelect => match key.code {
                KeyCode::Up => {
                    self.mode_cursor = self.mode_cursor.saturating_sub(1);
                }
                KeyCode::Down => {
                    self.mode_cursor = (self.mode_cursor + 1).min(Alphabet::ALL.len() - 1);
                }
                KeyCode::Enter => self.select_mode(Alphabet::ALL[self.mode_cursor]),
                KeyCode::Char(c) => {
                    if let Some(alphabet) = Alphabet::from_menu_choice(&c.to_string()) {
                        self.select_mode(alphabet);
                    } else if c == 'q' {
                        self.should_quit = true;
                    }
                }
                KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
            Screen::Playing => match key.code {
                // Letters are palette symbols here, so controls live on other keys
                KeyCode::Char(c) => self.push_symbol(c),
                KeyCode::Backspace => self.undo(),
                KeyCode::Enter => self.submit(),
                KeyCode::F(5) => self.restart(),
                KeyCode::Tab => self.back_to_mode_select(),
                KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
            Screen::GameOver => match key.code {
                // Enter is ignored so a repeated submit keeps the revealed board
                KeyCode::Char('r') | KeyCode::F(5) => self.restart(),
                KeyCode::Char('m') | KeyCode::Tab => self.back_to_mode_select(),
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = %err, "Interactive session failed");
    }

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
