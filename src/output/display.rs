//! Console display for game events
//!
//! Every function writes to the given sink so the console loop can be driven
//! from memory in tests.

use super::formatters::{attempts_bar, score_pegs};
use crate::core::{Alphabet, SecretCode};
use crate::game::{AttemptOutcome, Statistics};
use colored::Colorize;
use std::io::{self, Write};

/// Print the welcome banner
///
/// # Errors
/// Returns any error from the output sink.
pub fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                   Welcome to Mastermind!                     ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")
}

/// Print the game mode menu
///
/// # Errors
/// Returns any error from the output sink.
pub fn print_mode_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Select Game Mode:")?;
    for (i, alphabet) in Alphabet::ALL.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, alphabet.name())?;
    }
    Ok(())
}

/// Print the rules for a new game
///
/// # Errors
/// Returns any error from the output sink.
pub fn print_instructions<W: Write>(
    out: &mut W,
    alphabet: Alphabet,
    code_length: usize,
    max_attempts: usize,
) -> io::Result<()> {
    writeln!(out, "{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "Mode: {}",
        alphabet.name().bright_yellow().bold()
    )?;
    writeln!(
        out,
        "Try to guess the secret code of {code_length} symbols. You have {max_attempts} attempts."
    )?;
    writeln!(out, "Use {}.", alphabet.hint())?;
    if alphabet != Alphabet::Numeric {
        let legend: Vec<String> = alphabet
            .symbols()
            .iter()
            .filter_map(|s| s.color_name().map(|name| format!("{s}={name}")))
            .collect();
        writeln!(out, "Colors: {}", legend.join(" "))?;
    }
    writeln!(out, "Type 'quit' to leave the game.")?;
    writeln!(out, "{}", "─".repeat(60).cyan())
}

/// Print feedback for an attempt that did not end the game
///
/// # Errors
/// Returns any error from the output sink.
pub fn print_feedback<W: Write>(
    out: &mut W,
    outcome: &AttemptOutcome,
    code_length: usize,
    max_attempts: usize,
) -> io::Result<()> {
    let remaining = max_attempts.saturating_sub(outcome.attempt);
    writeln!(
        out,
        "  {}  {}",
        outcome.guess.to_string().bright_white().bold(),
        score_pegs(outcome.score, code_length).bright_cyan()
    )?;
    writeln!(
        out,
        "  Correct digits/colors in correct positions: {}",
        outcome.score.exact()
    )?;
    writeln!(
        out,
        "  Correct digits/colors in wrong positions:   {}",
        outcome.score.present()
    )?;
    writeln!(
        out,
        "  Attempts left: [{}] {remaining}",
        attempts_bar(remaining, max_attempts, 20).green()
    )
}

/// Print the victory message
///
/// # Errors
/// Returns any error from the output sink.
pub fn print_win<W: Write>(out: &mut W, secret: &SecretCode, attempts: usize) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "{}",
        "Congratulations! You guessed the secret code correctly."
            .bright_green()
            .bold()
    )?;
    writeln!(
        out,
        "  The code was {} - cracked in {} {}",
        secret.to_string().bright_yellow().bold(),
        attempts,
        if attempts == 1 { "attempt" } else { "attempts" }
    )?;
    writeln!(out, "{}\n", "═".repeat(60).bright_cyan())
}

/// Print the game over message
///
/// # Errors
/// Returns any error from the output sink.
pub fn print_loss<W: Write>(out: &mut W, secret: &SecretCode) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).red())?;
    writeln!(
        out,
        "{} {}",
        "Out of attempts! The secret code was:".red().bold(),
        secret.to_string().bright_yellow().bold()
    )?;
    writeln!(out, "{}\n", "═".repeat(60).red())
}

/// Print totals for this run
///
/// # Errors
/// Returns any error from the output sink.
pub fn print_statistics<W: Write>(out: &mut W, stats: &Statistics) -> io::Result<()> {
    if stats.games_played == 0 {
        return Ok(());
    }

    writeln!(out, "\n📈 {}", "Statistics:".bright_cyan().bold())?;
    writeln!(out, "   Games played:  {}", stats.games_played)?;
    writeln!(
        out,
        "   Games won:     {} ({:.0}%)",
        stats.games_won,
        stats.win_rate()
    )?;
    if let Some(average) = stats.average_attempts() {
        writeln!(out, "   Avg attempts:  {average:.2}")?;
    }
    for (attempts, count) in &stats.guess_distribution {
        let pct = *count as f64 / stats.games_won as f64 * 100.0;
        let bar_width = (pct / 2.5) as usize;
        writeln!(
            out,
            "   {attempts:2}: {}{} {count:3}",
            "█".repeat(bar_width).green(),
            "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
        )?;
    }
    Ok(())
}
