//! TUI rendering with ratatui
//!
//! Intro, mode selection, the game board, and the game-over banner.

use super::app::{App, MessageStyle, Screen};
use crate::core::{Alphabet, Symbol};
use crate::game::GameState;
use crate::output::formatters::{attempts_bar, score_pegs};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    match app.screen {
        Screen::Intro => render_intro(f, f.area()),
        Screen::ModeSelect => render_mode_select(f, app, f.area()),
        Screen::Playing | Screen::GameOver => render_game(f, app),
    }
}

/// Display color for a code symbol
fn symbol_style(symbol: Symbol) -> Style {
    let color = match symbol.as_char() {
        'R' => Color::Red,
        'G' => Color::Green,
        'B' => Color::Blue,
        'Y' => Color::Yellow,
        'P' => Color::Magenta,
        'O' => Color::Rgb(255, 165, 0),
        _ => Color::White,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn symbol_spans(symbols: &[Symbol]) -> Vec<Span<'static>> {
    symbols
        .iter()
        .flat_map(|&s| [Span::styled(format!("{s}"), symbol_style(s)), Span::raw(" ")])
        .collect()
}

fn render_intro(f: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Welcome to Mastermind",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Crack the hidden code using exact and close feedback."),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to start, q to quit",
            Style::default().fg(Color::Yellow),
        )),
    ];

    let intro = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(intro, area);
}

fn render_mode_select(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Select Game Mode:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (i, alphabet) in Alphabet::ALL.iter().enumerate() {
        let selected = i == app.mode_cursor;
        let style = if selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(Span::styled(
            format!(" {}. {} ", i + 1, alphabet.name()),
            style,
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "↑/↓ + Enter or 1-3 to choose | q: Quit",
        Style::default().fg(Color::DarkGray),
    )));

    for message in app.messages.iter().filter(|m| m.style == MessageStyle::Error) {
        lines.push(Line::from(Span::styled(
            message.text.clone(),
            Style::default().fg(Color::Red),
        )));
    }

    let menu = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Mastermind ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(menu, area);
}

fn render_game(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Palette and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let mode = app
        .session
        .as_ref()
        .map_or("", |session| session.alphabet().name());
    let header = Paragraph::new(format!("MASTERMIND - {mode}"))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let Some(session) = &app.session else {
        return;
    };
    let length = session.code_length();

    let mut lines: Vec<Line> = app
        .history
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let mut spans = vec![Span::raw(format!("{:>2}: ", i + 1))];
            spans.extend(symbol_spans(entry.guess.symbols()));
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                score_pegs(entry.score, length),
                Style::default().fg(Color::Cyan),
            ));
            Line::from(spans)
        })
        .collect();

    if let Some(secret) = session.revealed_secret() {
        let mut spans = vec![Span::styled(
            "Code: ",
            Style::default().add_modifier(Modifier::BOLD),
        )];
        spans.extend(symbol_spans(secret.symbols()));
        lines.push(Line::from(""));
        lines.push(Line::from(spans));
    } else {
        // Empty rows for attempts still to come
        for i in app.history.len()..session.max_attempts() {
            lines.push(Line::from(Span::styled(
                format!("{:>2}: {}", i + 1, "· ".repeat(length)),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board (● exact  ○ close) ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Palette
            Constraint::Percentage(50), // Messages
        ])
        .split(area);

    render_palette(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_palette(f: &mut Frame, app: &App, area: Rect) {
    let Some(session) = &app.session else {
        return;
    };

    let lines: Vec<Line> = session
        .alphabet()
        .symbols()
        .into_iter()
        .map(|symbol| {
            let label = symbol
                .color_name()
                .map_or_else(|| format!("{symbol}"), |name| format!("{symbol}  {name}"));
            Line::from(vec![
                Span::styled(" ■ ", symbol_style(symbol)),
                Span::styled(label, symbol_style(symbol)),
            ])
        })
        .collect();

    let palette = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Palette ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(palette, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.screen {
        Screen::GameOver => {
            let won = app
                .session
                .as_ref()
                .is_some_and(|s| s.state() == GameState::Won);
            let title = if won {
                " CONGRATULATIONS! | r: Restart  m: Mode  q: Quit "
            } else {
                " GAME OVER | r: Restart  m: Mode  q: Quit "
            };
            (title, Line::from(""), if won { Color::Green } else { Color::Red })
        }
        _ => {
            let mut spans = symbol_spans(app.buffer.symbols());
            let open = app.buffer.capacity().saturating_sub(app.buffer.len());
            spans.extend(std::iter::repeat_n(Span::raw("_ "), open));
            (
                " Current Guess | Enter: Submit  Backspace: Undo ",
                Line::from(spans),
                Color::Yellow,
            )
        }
    };

    let input = Paragraph::new(content).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(25),
            Constraint::Percentage(45),
        ])
        .split(area);

    let remaining = app.attempts_remaining();
    let attempts_text = format!(
        "Attempts Left: {remaining} {}",
        attempts_bar(remaining, app.config.max_attempts, 10)
    );
    let attempts = Paragraph::new(attempts_text).alignment(Alignment::Center);
    f.render_widget(attempts, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.games_played,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help = Paragraph::new("F5: Restart | Tab: Mode | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SecretCode;
    use crate::game::GameConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn app() -> App {
        App::new(GameConfig::default(), StdRng::seed_from_u64(3))
    }

    #[test]
    fn intro_screen_renders_title() {
        assert!(screen_text(&app()).contains("Welcome to Mastermind"));
    }

    #[test]
    fn mode_select_lists_all_modes() {
        let mut app = app();
        app.screen = Screen::ModeSelect;
        let text = screen_text(&app);
        assert!(text.contains("Numbers Only"));
        assert!(text.contains("Colors Only"));
        assert!(text.contains("Mixed (Numbers and Colors)"));
    }

    #[test]
    fn mode_select_after_tab_hides_old_game_errors() {
        let mut app = app();
        let secret = SecretCode::from_symbols("RGBY".chars().map(Symbol::new).collect());
        app.start_with_secret(Alphabet::Color, secret).unwrap();
        app.push_symbol('x');
        app.back_to_mode_select();

        let text = screen_text(&app);
        assert!(text.contains("Select Game Mode:"));
        assert!(!text.contains("is not in this mode"));
    }

    #[test]
    fn game_screen_shows_palette_and_attempts() {
        let mut app = app();
        let secret = SecretCode::from_symbols("RGBY".chars().map(Symbol::new).collect());
        app.start_with_secret(Alphabet::Color, secret).unwrap();

        let text = screen_text(&app);
        assert!(text.contains("Purple"));
        assert!(text.contains("Attempts Left: 10"));
    }
}
