//! Wordle feedback calculation and representation
//!
//! Feedback is one `LetterState` per position. For entropy bucketing it is
//! reduced to a signature: the sum of per-position weights
//! (correct 4, present 2, absent 1, empty 0). The signature is lossy on
//! purpose; different patterns with the same weight total share a bucket.

use super::letter_state::LetterState;
use super::word::{WORD_LENGTH, Word, WordError};
use std::fmt;
use std::str::FromStr;

/// Feedback for one guess against one target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback([LetterState; WORD_LENGTH]);

/// Error type for unparsable feedback strings
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedbackError {
    #[error("Feedback must have exactly {WORD_LENGTH} symbols, got {0}")]
    InvalidLength(usize),
    #[error("Invalid feedback symbol '{0}' (use G, Y or -)")]
    InvalidSymbol(char),
}

impl Feedback {
    /// All greens
    pub const PERFECT: Self = Self([LetterState::Correct; WORD_LENGTH]);

    /// Feedback for a row that has not been evaluated
    pub const EMPTY: Self = Self([LetterState::Empty; WORD_LENGTH]);

    /// Wrap raw per-position states
    #[inline]
    #[must_use]
    pub const fn new(states: [LetterState; WORD_LENGTH]) -> Self {
        Self(states)
    }

    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// # Algorithm
    /// 1. Exact matches are correct; any other letter is provisionally
    ///    present if the target contains it anywhere, absent otherwise.
    /// 2. For every letter the guess holds more often than the target, only
    ///    `target count - correct count` present marks survive, kept in index
    ///    order; the rest are downgraded to absent.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::{Feedback, LetterState::*, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("slate").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &target);
    ///
    /// assert_eq!(feedback.states(), &[Absent, Absent, Correct, Absent, Correct]);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let mut states = [LetterState::Absent; WORD_LENGTH];

        for (i, state) in states.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            *state = if letter == target.char_at(i) {
                LetterState::Correct
            } else if target.has_letter(letter) {
                LetterState::Present
            } else {
                LetterState::Absent
            };
        }

        for letter in guess.distinct_letters() {
            let positions = guess.positions_of(letter);
            let target_count = target.count_of(letter);
            if positions.len() <= target_count {
                continue;
            }

            let correct = positions
                .iter()
                .filter(|&&i| states[i] == LetterState::Correct)
                .count();
            let mut remaining = target_count - correct;

            for &i in positions {
                if states[i] != LetterState::Present {
                    continue;
                }
                if remaining > 0 {
                    remaining -= 1;
                } else {
                    states[i] = LetterState::Absent;
                }
            }
        }

        Self(states)
    }

    /// Evaluate raw strings, rejecting malformed input
    ///
    /// # Errors
    /// Returns `WordError` if either string is not a valid word.
    pub fn evaluate_str(guess: &str, target: &str) -> Result<Self, WordError> {
        Ok(Self::evaluate(&Word::new(guess)?, &Word::new(target)?))
    }

    /// Per-position states
    #[inline]
    #[must_use]
    pub const fn states(&self) -> &[LetterState; WORD_LENGTH] {
        &self.0
    }

    /// State at one position
    #[inline]
    #[must_use]
    pub const fn state_at(&self, position: usize) -> LetterState {
        self.0[position]
    }

    /// Weighted-sum bucket key used by the ranker
    #[inline]
    #[must_use]
    pub fn signature(&self) -> u8 {
        self.0.iter().map(|s| s.weight()).sum()
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Number of positions holding `state`
    #[must_use]
    pub fn count(&self, state: LetterState) -> usize {
        self.0.iter().filter(|&&s| s == state).count()
    }

    /// Convert feedback to emoji string like "🟩🟨⬛🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl FromStr for Feedback {
    type Err = FeedbackError;

    /// Parse feedback like "GY-GY" or "🟩🟨⬛🟩🟨"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.trim().chars().collect();
        if symbols.len() != WORD_LENGTH {
            return Err(FeedbackError::InvalidLength(symbols.len()));
        }

        let mut states = [LetterState::Empty; WORD_LENGTH];
        for (state, &ch) in states.iter_mut().zip(&symbols) {
            *state = LetterState::from_symbol(ch).ok_or(FeedbackError::InvalidSymbol(ch))?;
        }

        Ok(Self(states))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for state in &self.0 {
            write!(f, "{}", state.symbol())?;
        }
        Ok(())
    }
}

/// A guessed word together with the feedback it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    pub word: Word,
    pub feedback: Feedback,
}

impl Guess {
    #[must_use]
    pub const fn new(word: Word, feedback: Feedback) -> Self {
        Self { word, feedback }
    }

    /// Score `word` against `target` and pair the two
    #[must_use]
    pub fn scored(word: Word, target: &Word) -> Self {
        let feedback = Feedback::evaluate(&word, target);
        Self { word, feedback }
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word, self.feedback)
    }
}
