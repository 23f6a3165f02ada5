//! Loaded dictionary with a validity predicate

use crate::core::Word;
use rustc_hash::FxHashSet;

/// Ordered, deduplicated word list
///
/// Order is the source file's order; it is the tie-break order of rankings.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl Dictionary {
    /// Build from already validated words, dropping later duplicates
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut index = FxHashSet::default();
        let words = words
            .into_iter()
            .filter(|word| index.insert(word.clone()))
            .collect();

        Self { words, index }
    }

    /// Build from raw strings, skipping anything that is not a valid word
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::wordlists::Dictionary;
    ///
    /// let dict = Dictionary::from_words(["crane", "slate", "toolong", "crane"]);
    /// assert_eq!(dict.len(), 2);
    /// assert!(dict.contains_str("SLATE"));
    /// ```
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(words.into_iter().filter_map(|s| Word::new(s).ok()))
    }

    /// All words in dictionary order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Is this a real word
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// String form of [`Dictionary::contains`]; malformed input is simply absent
    #[must_use]
    pub fn contains_str(&self, word: &str) -> bool {
        Word::new(word).is_ok_and(|w| self.contains(&w))
    }

    /// Look a word up, returning the dictionary's own copy
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&Word> {
        let word = Word::new(word).ok()?;
        self.index.get(&word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_source_order() {
        let dict = Dictionary::from_words(["slate", "crane", "irate"]);
        let texts: Vec<&str> = dict.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["SLATE", "CRANE", "IRATE"]);
    }

    #[test]
    fn drops_duplicates_and_invalid_entries() {
        let dict = Dictionary::from_words(["crane", "CRANE", "abc", "cr4ne", "slate"]);
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn validity_predicate() {
        let dict = Dictionary::from_words(["crane", "slate"]);
        assert!(dict.contains(&Word::new("crane").unwrap()));
        assert!(!dict.contains(&Word::new("moody").unwrap()));
        assert!(dict.contains_str("Slate"));
        assert!(!dict.contains_str("slates"));
    }

    #[test]
    fn get_returns_dictionary_word() {
        let dict = Dictionary::from_words(["crane"]);
        assert_eq!(dict.get("crane").map(Word::text), Some("CRANE"));
        assert!(dict.get("slate").is_none());
        assert!(dict.get("").is_none());
    }

    #[test]
    fn get_agrees_with_contains() {
        let dict = Dictionary::from_words(["slate", "crane", "irate", "crane"]);
        for word in ["SLATE", "crane", "Irate", "moody", "xx"] {
            assert_eq!(dict.get(word).is_some(), dict.contains_str(word));
        }
        assert_eq!(dict.get("irate"), Some(&dict.words()[2]));
    }

    #[test]
    fn empty_dictionary() {
        let dict = Dictionary::default();
        assert!(dict.is_empty());
        assert!(dict.words().is_empty());
    }
}
