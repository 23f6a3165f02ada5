//! Word analysis command
//!
//! Analyzes the entropy and information content of a specific word.

use crate::core::Word;
use crate::solver::entropy::calculate_metrics;
use crate::wordlists::Dictionary;
use anyhow::{Context, Result, bail};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub max_partition: usize,
    pub total_candidates: usize,
}

/// Analyze the entropy of a word against a set of candidates
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (wrong length or not letters)
/// - The word is not in `dictionary`
pub fn analyze_word(word: &str, dictionary: &Dictionary, candidates: &[Word]) -> Result<AnalysisResult> {
    let word_obj = Word::new(word).with_context(|| format!("invalid word {word:?}"))?;

    if !dictionary.contains(&word_obj) {
        bail!("word {word_obj} is not in the word list");
    }

    let metrics = calculate_metrics(&word_obj, candidates);

    Ok(AnalysisResult {
        word: word_obj.text().to_string(),
        entropy: metrics.entropy,
        expected_reduction: metrics.entropy.exp2(),
        expected_remaining: metrics.expected_remaining,
        max_partition: metrics.max_partition,
        total_candidates: candidates.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::from_words(["CRANE", "TRACE", "SLATE", "BRAVE", "GRATE", "IRATE", "MOODY"])
    }

    #[test]
    fn analyze_valid_word() {
        let dict = dictionary();
        let result = analyze_word("slate", &dict, dict.words()).unwrap();

        assert_eq!(result.word, "SLATE");
        assert!(result.entropy > 0.0);
        assert!(result.expected_reduction >= 1.0);
        assert_eq!(result.total_candidates, dict.len());
    }

    #[test]
    fn analyze_unknown_word() {
        let dict = dictionary();
        assert!(analyze_word("zzzzz", &dict, dict.words()).is_err());
        assert!(analyze_word("zz", &dict, dict.words()).is_err());
    }

    #[test]
    fn entropy_properties() {
        let dict = dictionary();
        let result = analyze_word("crane", &dict, dict.words()).unwrap();

        assert!(result.entropy >= 0.0);
        assert!(result.entropy <= (dict.len() as f64).log2());
        assert!(result.expected_remaining >= 1.0);
        assert!(result.expected_remaining <= dict.len() as f64);
        assert!(result.max_partition >= 1);
    }

    #[test]
    fn candidates_can_be_narrower_than_dictionary() {
        let dict = dictionary();
        let pool: Vec<Word> = ["GRATE", "IRATE"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();

        // MOODY is a legal guess even though it cannot be the answer
        let result = analyze_word("moody", &dict, &pool).unwrap();
        assert_eq!(result.total_candidates, 2);
        assert_eq!(result.entropy, 0.0);
        assert_eq!(result.max_partition, 2);
    }
}
