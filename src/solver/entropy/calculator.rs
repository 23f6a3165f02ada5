//! Shannon entropy over feedback signatures
//!
//! Given a guess and a candidate pool, every candidate is treated as a
//! possible target. The resulting feedback signatures form a histogram whose
//! entropy is the guess's expected information gain.

use crate::core::{Feedback, Word};
use rustc_hash::FxHashMap;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Largest signature bucket (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Histogram of feedback signatures produced by `guess` across `candidates`
#[must_use]
pub fn signature_histogram<'a, I>(guess: &Word, candidates: I) -> FxHashMap<u8, usize>
where
    I: IntoIterator<Item = &'a Word>,
{
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let signature = Feedback::evaluate(guess, candidate).signature();
        *counts.entry(signature).or_insert(0) += 1;
    }

    counts
}

/// Calculate Shannon entropy for a guess against candidates
///
/// Returns the expected information gain in bits.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the share of candidates producing signature x.
///
/// # Examples
/// ```
/// use wordle_engine::core::Word;
/// use wordle_engine::solver::entropy::calculate_entropy;
///
/// let guess = Word::new("slate").unwrap();
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("moody").unwrap(),
/// ];
///
/// let entropy = calculate_entropy(&guess, &candidates);
/// assert!((entropy - 1.0).abs() < 1e-9); // two equal buckets
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, candidates: &[Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    shannon_entropy(&signature_histogram(guess, candidates))
}

/// Calculate Shannon entropy from a bucket histogram
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for certain outcome (one bucket with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n buckets
#[must_use]
pub fn shannon_entropy<K, S>(bucket_counts: &std::collections::HashMap<K, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = bucket_counts.values().sum::<usize>() as f64;

    // A lone bucket would otherwise sum to -0.0
    if bucket_counts.values().filter(|&&count| count > 0).count() <= 1 {
        return 0.0;
    }

    bucket_counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate comprehensive metrics for a guess
///
/// Buckets by the same signature as [`calculate_entropy`].
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[Word]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let histogram = signature_histogram(guess, candidates);
    let total = candidates.len() as f64;

    let expected_remaining: f64 = histogram
        .values()
        .map(|&size| {
            let p = size as f64 / total;
            p * size as f64
        })
        .sum();

    let max_partition = histogram.values().copied().max().unwrap_or(0);

    GuessMetrics {
        entropy: shannon_entropy(&histogram),
        expected_remaining,
        max_partition,
    }
}
