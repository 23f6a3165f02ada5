//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterState, WORD_LENGTH};
use colored::{ColoredString, Colorize};

/// One letter tile colored by its state
#[must_use]
pub fn letter_tile(letter: u8, state: LetterState) -> ColoredString {
    let tile = format!(" {} ", char::from(letter));
    match state {
        LetterState::Correct => tile.black().on_green().bold(),
        LetterState::Present => tile.black().on_yellow().bold(),
        LetterState::Absent => tile.white().on_bright_black(),
        LetterState::Empty => tile.normal(),
    }
}

/// A full board row of colored tiles
#[must_use]
pub fn colored_row(letters: &[u8; WORD_LENGTH], feedback: &Feedback) -> String {
    letters
        .iter()
        .zip(feedback.states())
        .map(|(&letter, &state)| letter_tile(letter, state).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to the pool's maximum possible entropy
#[must_use]
pub fn entropy_bar(entropy: f64, pool_size: usize, width: usize) -> String {
    let max_entropy = (pool_size.max(2) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}
