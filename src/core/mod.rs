//! Core domain types for Wordle
//!
//! This module contains the word, letter-state and feedback types plus the
//! letter-state evaluator. Everything here is pure and deterministic.

mod feedback;
mod letter_state;
mod word;

pub use feedback::{Feedback, FeedbackError, Guess};
pub use letter_state::LetterState;
pub use word::{WORD_LENGTH, Word, WordError};
