//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod play;
pub mod simple;
pub mod solve;
pub mod suggest;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use play::{choose_target, run_play};
pub use simple::run_simple;
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
pub use suggest::{SuggestResult, parse_guess, suggest};
