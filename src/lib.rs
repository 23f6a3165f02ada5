//! Wordle Engine
//!
//! Feedback evaluation, candidate filtering and entropy ranking for Wordle.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_engine::core::{Feedback, Guess, LetterState, Word};
//! use wordle_engine::solver::{filter, rank};
//!
//! let pool: Vec<Word> = ["crane", "trace", "slate", "brave"]
//!     .iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//!
//! // Score a guess against the hidden word
//! let guess = Word::new("trace").unwrap();
//! let target = Word::new("crane").unwrap();
//! let feedback = Feedback::evaluate(&guess, &target);
//! assert_eq!(feedback.state_at(0), LetterState::Absent);
//!
//! // Narrow the pool and rank what is left
//! let remaining = filter(&Guess::new(guess, feedback), &pool);
//! let ranked = rank(&remaining);
//! assert_eq!(ranked[0].word.text(), "CRANE");
//! ```

// Core domain types
pub mod core;

// Filtering, ranking and solving sessions
pub mod solver;

// Word lists
pub mod wordlists;

// Play mode board state
pub mod game;

// Regex search over the dictionary
pub mod lookup;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
