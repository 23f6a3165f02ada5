//! Word solving command
//!
//! Plays the top-ranked suggestion against a known target until solved.

use crate::core::{Feedback, Guess, Word};
use crate::game::MAX_GUESSES;
use crate::solver::{Session, SessionConfig};
use crate::wordlists::Dictionary;
use anyhow::{Context, Result, bail};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: MAX_GUESSES,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy: f64,
}

/// Solve a specific word with a fresh session over `dictionary`
///
/// # Errors
///
/// Returns an error if the target word is malformed or not in the
/// dictionary.
pub fn solve_word(
    config: SolveConfig,
    dictionary: &Dictionary,
    session_config: SessionConfig,
) -> Result<SolveResult> {
    let target = Word::new(&config.target)
        .with_context(|| format!("invalid target word {:?}", config.target))?;
    if !dictionary.contains(&target) {
        bail!("target {target} is not in the word list");
    }

    let mut session = Session::with_config(dictionary, session_config);
    let mut guesses: Vec<GuessStep> = Vec::new();

    for _ in 0..config.max_guesses {
        let candidates_before = session.candidates().len();

        // The target never leaves the pool, so there is always a suggestion
        let Some(best) = session.best_guess() else {
            break;
        };

        let feedback = Feedback::evaluate(&best.word, &target);
        let candidates_after = session.apply(Guess::new(best.word.clone(), feedback));

        guesses.push(GuessStep {
            word: best.word.text().to_string(),
            feedback,
            candidates_before,
            candidates_after,
            entropy: best.score,
        });

        if feedback.is_perfect() {
            return Ok(SolveResult {
                success: true,
                guesses,
                target: target.text().to_string(),
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target: target.text().to_string(),
    })
}
