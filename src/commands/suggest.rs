//! Suggestion command
//!
//! Applies a list of already played guesses and ranks what is left.

use crate::core::{Feedback, Guess, Word};
use crate::solver::{ScoredCandidate, Session, SessionConfig};
use crate::wordlists::Dictionary;
use anyhow::{Context, Result, anyhow};

/// Ranked pool after a sequence of guesses
pub struct SuggestResult {
    pub history: Vec<Guess>,
    pub remaining: usize,
    pub ranked: Vec<ScoredCandidate>,
}

/// Parse a guess written as `WORD:FEEDBACK`, e.g. `trace:-GGYG`
///
/// # Errors
///
/// Returns an error if the separator is missing or either half is malformed.
pub fn parse_guess(entry: &str) -> Result<Guess> {
    let (word, feedback) = entry
        .split_once(':')
        .ok_or_else(|| anyhow!("expected WORD:FEEDBACK, got {entry:?}"))?;

    let word = Word::new(word.trim()).with_context(|| format!("bad word in {entry:?}"))?;
    let feedback: Feedback = feedback
        .parse()
        .with_context(|| format!("bad feedback in {entry:?}"))?;

    Ok(Guess::new(word, feedback))
}

/// Filter the dictionary by every guess, in order, and rank the survivors
///
/// # Errors
///
/// Returns an error if any guess entry cannot be parsed; nothing is applied
/// in that case.
pub fn suggest(
    dictionary: &Dictionary,
    entries: &[String],
    session_config: SessionConfig,
) -> Result<SuggestResult> {
    let guesses = entries
        .iter()
        .map(|entry| parse_guess(entry))
        .collect::<Result<Vec<_>>>()?;

    let mut session = Session::with_config(dictionary, session_config);
    for guess in guesses {
        session.apply(guess);
    }

    Ok(SuggestResult {
        history: session.history().to_vec(),
        remaining: session.candidates().len(),
        ranked: session.suggestions(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterState;

    fn dictionary() -> Dictionary {
        Dictionary::from_words(["CRANE", "TRACE", "SLATE", "BRAVE"])
    }

    #[test]
    fn parse_guess_entry() {
        let guess = parse_guess("trace:-GGYG").unwrap();
        assert_eq!(guess.word.text(), "TRACE");
        assert_eq!(guess.feedback.state_at(3), LetterState::Present);
    }

    #[test]
    fn parse_guess_rejects_malformed() {
        assert!(parse_guess("trace").is_err());
        assert!(parse_guess("trac:-GGYG").is_err());
        assert!(parse_guess("trace:-GG").is_err());
        assert!(parse_guess("trace:-GGXG").is_err());
    }

    #[test]
    fn no_guesses_ranks_whole_dictionary() {
        let dict = dictionary();
        let result = suggest(&dict, &[], SessionConfig::default()).unwrap();
        assert_eq!(result.remaining, dict.len());
        assert_eq!(result.ranked.len(), dict.len());
    }

    #[test]
    fn guesses_narrow_suggestions() {
        let dict = dictionary();
        let result = suggest(&dict, &["TRACE:-GGYG".to_string()], SessionConfig::default()).unwrap();

        assert_eq!(result.history.len(), 1);
        assert_eq!(result.remaining, 1);
        assert_eq!(result.ranked[0].word.text(), "CRANE");
        assert_eq!(result.ranked[0].score, 0.0);
    }

    #[test]
    fn bad_entry_fails_whole_request() {
        let dict = dictionary();
        let entries = ["TRACE:-GGYG".to_string(), "oops".to_string()];
        assert!(suggest(&dict, &entries, SessionConfig::default()).is_err());
    }
}
