//! Pattern lookup over the dictionary
//!
//! Free-form regular expressions typed by a player. A pattern that does not
//! compile is not an error for the caller; it simply matches nothing.

use crate::core::Word;
use crate::wordlists::Dictionary;
use regex::RegexBuilder;

/// Pattern used when the player has typed nothing
pub const DEFAULT_PATTERN: &str = "^[A-Z]{5}$";

/// Dictionary words matching `pattern`, case-insensitively, in dictionary order
///
/// # Examples
/// ```
/// use wordle_engine::lookup::lookup;
/// use wordle_engine::wordlists::Dictionary;
///
/// let dict = Dictionary::from_words(["crane", "crate", "slate"]);
/// let hits = lookup("^cra.e$", &dict);
/// assert_eq!(hits.len(), 2);
///
/// assert!(lookup("[unclosed", &dict).is_empty());
/// ```
#[must_use]
pub fn lookup(pattern: &str, dictionary: &Dictionary) -> Vec<Word> {
    let pattern = if pattern.trim().is_empty() {
        DEFAULT_PATTERN
    } else {
        pattern
    };

    let regex = match RegexBuilder::new(pattern).case_insensitive(true).build() {
        Ok(regex) => regex,
        Err(e) => {
            log::warn!("invalid lookup pattern {pattern:?}: {e}");
            return Vec::new();
        }
    };

    dictionary
        .words()
        .iter()
        .filter(|word| regex.is_match(word.text()))
        .cloned()
        .collect()
}
