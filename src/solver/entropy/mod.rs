//! Entropy of feedback signature distributions
//!
//! This is the scoring foundation of the ranker.

mod calculator;

pub use calculator::{
    GuessMetrics, calculate_entropy, calculate_metrics, shannon_entropy, signature_histogram,
};
