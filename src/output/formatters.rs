//! Formatting utilities shared by the console and the interactive UI

use crate::core::Score;

/// Peg for an exact match
pub const EXACT_PEG: char = '●';
/// Peg for a present match
pub const PRESENT_PEG: char = '○';
/// Placeholder for a position with no match
pub const MISS_PEG: char = '·';

/// Format a score as key pegs
///
/// Exact pegs come first, then present pegs, padded with misses to `length`.
/// Like the physical game, pegs do not say which position they refer to.
#[must_use]
pub fn score_pegs(score: Score, length: usize) -> String {
    let misses = length.saturating_sub(score.exact() + score.present());

    std::iter::repeat_n(EXACT_PEG, score.exact())
        .chain(std::iter::repeat_n(PRESENT_PEG, score.present()))
        .chain(std::iter::repeat_n(MISS_PEG, misses))
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how many attempts are left out of the budget
#[must_use]
pub fn attempts_bar(remaining: usize, max: usize, width: usize) -> String {
    create_progress_bar(remaining as f64, max as f64, width)
}
