//! Solving session
//!
//! Threads a candidate pool through successive guesses. The pool starts as
//! the whole dictionary and each applied guess replaces it with a freshly
//! filtered one.

use super::filter::filter;
use super::ranker::{ScoredCandidate, rank, rank_parallel};
use crate::core::{Guess, Word};
use crate::wordlists::Dictionary;
use std::time::Instant;

/// Tuning for a solving session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Pools larger than this are ranked with rayon
    pub parallel_threshold: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 200,
        }
    }
}

/// One solver-mode game: dictionary, guesses so far and the surviving pool
pub struct Session<'a> {
    dictionary: &'a Dictionary,
    config: SessionConfig,
    candidates: Vec<Word>,
    history: Vec<Guess>,
}

impl<'a> Session<'a> {
    /// Start a session over the whole dictionary
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self::with_config(dictionary, SessionConfig::default())
    }

    #[must_use]
    pub fn with_config(dictionary: &'a Dictionary, config: SessionConfig) -> Self {
        Self {
            dictionary,
            config,
            candidates: dictionary.words().to_vec(),
            history: Vec::new(),
        }
    }

    /// Apply one guess and return the number of surviving candidates
    pub fn apply(&mut self, guess: Guess) -> usize {
        let before = self.candidates.len();
        self.candidates = filter(&guess, &self.candidates);
        log::debug!(
            "{guess}: {before} -> {} candidates",
            self.candidates.len()
        );
        self.history.push(guess);
        self.candidates.len()
    }

    /// Words still consistent with every guess
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// Guesses applied so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[Guess] {
        &self.history
    }

    /// The dictionary this session draws from
    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    /// True once a guess has received all-correct feedback
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.history.last().is_some_and(|g| g.feedback.is_perfect())
    }

    /// Rank the current candidates
    #[must_use]
    pub fn suggestions(&self) -> Vec<ScoredCandidate> {
        let start = Instant::now();
        let ranked = if self.candidates.len() > self.config.parallel_threshold {
            rank_parallel(&self.candidates)
        } else {
            rank(&self.candidates)
        };
        log::debug!(
            "ranked {} candidates in {:.3}s",
            ranked.len(),
            start.elapsed().as_secs_f64()
        );
        ranked
    }

    /// Best-scoring candidate that has not been played yet
    ///
    /// A played word can survive its own feedback when every non-correct
    /// letter also sits in a correct position elsewhere, so the top
    /// suggestion alone could repeat forever.
    #[must_use]
    pub fn best_guess(&self) -> Option<ScoredCandidate> {
        self.first_unplayed(&self.suggestions()).cloned()
    }

    /// Highest entry of an existing ranking whose word has not been played
    #[must_use]
    pub fn first_unplayed<'r>(&self, ranked: &'r [ScoredCandidate]) -> Option<&'r ScoredCandidate> {
        ranked
            .iter()
            .find(|candidate| !self.history.iter().any(|g| g.word == candidate.word))
    }

    /// Drop the most recent guess and rebuild the pool from the dictionary
    pub fn undo(&mut self) -> Option<Guess> {
        let undone = self.history.pop()?;
        self.candidates = self
            .history
            .iter()
            .fold(self.dictionary.words().to_vec(), |pool, guess| {
                filter(guess, &pool)
            });
        Some(undone)
    }

    /// Start over with the full dictionary
    pub fn reset(&mut self) {
        self.candidates = self.dictionary.words().to_vec();
        self.history.clear();
    }
}
