//! Benchmark command
//!
//! Auto-solves many targets and reports the guess count distribution. Every
//! target gets its own session; sessions run in parallel on rayon.

use super::solve::{SolveConfig, solve_word};
use crate::solver::SessionConfig;
use crate::wordlists::Dictionary;
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count of solved games → number of games
    pub distribution: BTreeMap<usize, usize>,
    pub failed_words: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Solve the first `count` dictionary words as targets
///
/// `show_progress` draws an indicatif bar on stderr.
#[must_use]
pub fn run_benchmark(
    dictionary: &Dictionary,
    count: usize,
    max_guesses: usize,
    session_config: SessionConfig,
    show_progress: bool,
) -> BenchmarkResult {
    let targets = &dictionary.words()[..count.min(dictionary.len())];

    let progress = if show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {eta}")
    {
        progress.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();

    // (target, guesses used, solved)
    let outcomes: Vec<(String, usize, bool)> = targets
        .par_iter()
        .progress_with(progress.clone())
        .map(|target| {
            let mut config = SolveConfig::new(target.text().to_string());
            config.max_guesses = max_guesses;
            match solve_word(config, dictionary, session_config) {
                Ok(result) => (result.target, result.guesses.len(), result.success),
                Err(e) => {
                    log::warn!("could not solve {target}: {e:#}");
                    (target.text().to_string(), 0, false)
                }
            }
        })
        .collect();

    progress.finish_and_clear();
    let duration = start.elapsed();

    let mut distribution = BTreeMap::new();
    let mut failed_words = Vec::new();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses_seen = 0;

    for (word, guesses, success) in outcomes {
        if success {
            *distribution.entry(guesses).or_insert(0) += 1;
            total_guesses += guesses;
            min_guesses = min_guesses.min(guesses);
            max_guesses_seen = max_guesses_seen.max(guesses);
        } else {
            failed_words.push(word);
        }
    }

    let solved = targets.len() - failed_words.len();
    log::info!(
        "benchmark: {solved}/{} solved in {:.2}s",
        targets.len(),
        duration.as_secs_f64()
    );

    BenchmarkResult {
        total_words: targets.len(),
        solved,
        total_guesses,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses: max_guesses_seen,
        distribution,
        failed_words,
        duration,
        words_per_second: targets.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
