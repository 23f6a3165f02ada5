//! Entropy ranking of a candidate pool
//!
//! Every candidate is scored as if it were the next guess, against every
//! pool member as a hypothetical target. Cost is O(n²) evaluations, so
//! this is only run on pools that have already been narrowed.

use super::entropy::calculate_entropy;
use crate::core::Word;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::fmt;

/// A candidate with its entropy score in bits
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub word: Word,
    pub score: f64,
}

impl fmt::Display for ScoredCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.3} bits)", self.word, self.score)
    }
}

/// Rank `pool` by descending entropy score
///
/// Ties keep pool order. An empty pool gives an empty ranking.
///
/// # Examples
/// ```
/// use wordle_engine::core::Word;
/// use wordle_engine::solver::rank;
///
/// let pool: Vec<Word> = ["aaaab", "aaaac", "aaaad"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let ranked = rank(&pool);
/// assert_eq!(ranked[0].word.text(), "AAAAB");
/// assert!((ranked[0].score - 0.918_295_834_054_489_6).abs() < 1e-9);
/// ```
#[must_use]
pub fn rank(pool: &[Word]) -> Vec<ScoredCandidate> {
    let scored = pool
        .iter()
        .map(|word| ScoredCandidate {
            word: word.clone(),
            score: calculate_entropy(word, pool),
        })
        .collect();

    sorted(scored)
}

/// Same result as [`rank`], with per-candidate scoring spread over the
/// rayon pool
///
/// Blocks until every score is known; only then is the ranking sorted.
#[must_use]
pub fn rank_parallel(pool: &[Word]) -> Vec<ScoredCandidate> {
    let scored = pool
        .par_iter()
        .map(|word| ScoredCandidate {
            word: word.clone(),
            score: calculate_entropy(word, pool),
        })
        .collect();

    sorted(scored)
}

/// Stable descending sort by score
fn sorted(mut scored: Vec<ScoredCandidate>) -> Vec<ScoredCandidate> {
    scored.sort_by(|a, b| descending(a.score, b.score));
    scored
}

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}
