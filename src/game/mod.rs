//! Play mode
//!
//! A game against a hidden target, plus the row editor the front end types
//! into. Scoring is delegated to [`crate::core::Feedback::evaluate`].

mod play;
mod row;

pub use play::{Game, GameConfig, GameError, GameStatus, MAX_GUESSES};
pub use row::RowInput;
