//! Word list loading utilities
//!
//! Reads a dictionary file with one word per line. Blank lines are ignored;
//! lines that are not valid words are skipped and reported through `log`.

use super::Dictionary;
use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for unusable word list files
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("cannot read word list: {0}")]
    Io(#[from] io::Error),
    #[error("word list contains no valid words")]
    Empty,
}

/// Load a dictionary from a file
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read and
/// `WordListError::Empty` if it holds no valid word.
///
/// # Examples
/// ```no_run
/// use wordle_engine::wordlists::load_dictionary;
///
/// let dict = load_dictionary("data/words.txt").unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> Result<Dictionary, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let dictionary = parse_word_list(&content);

    if dictionary.is_empty() {
        return Err(WordListError::Empty);
    }

    log::info!("loaded {} words from {}", dictionary.len(), path.display());
    Ok(dictionary)
}

/// Parse word list text into a dictionary
#[must_use]
pub fn parse_word_list(content: &str) -> Dictionary {
    let mut skipped = 0usize;

    let words: Vec<Word> = content
        .lines()
        .enumerate()
        .filter_map(|(line_no, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    log::warn!("skipping line {}: {trimmed:?}: {e}", line_no + 1);
                    skipped += 1;
                    None
                }
            }
        })
        .collect();

    if skipped > 0 {
        log::warn!("skipped {skipped} invalid word list entries");
    }

    Dictionary::new(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_converts_valid_words() {
        let dict = parse_word_list("crane\nslate\nirate\n");

        assert_eq!(dict.len(), 3);
        assert_eq!(dict.words()[0].text(), "CRANE");
        assert_eq!(dict.words()[2].text(), "IRATE");
    }

    #[test]
    fn parse_skips_invalid_and_blank_lines() {
        let dict = parse_word_list("crane\n\ntoolong\n  abc \n  slate  \r\n");

        assert_eq!(dict.len(), 2);
        assert_eq!(dict.words()[0].text(), "CRANE");
        assert_eq!(dict.words()[1].text(), "SLATE");
    }

    #[test]
    fn parse_empty() {
        assert!(parse_word_list("").is_empty());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let result = load_dictionary("/definitely/not/here/words.txt");
        assert!(matches!(result, Err(WordListError::Io(_))));
    }

    #[test]
    fn load_file_without_words_is_empty_error() {
        let path = std::env::temp_dir().join(format!(
            "wordle_engine_empty_{}.txt",
            std::process::id()
        ));
        fs::write(&path, "\nnope\n").unwrap();

        let result = load_dictionary(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(WordListError::Empty)));
    }

    #[test]
    fn load_bundled_word_list() {
        let dict = load_dictionary(concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.txt")).unwrap();
        assert!(dict.len() > 100);
        assert!(dict.contains_str("crane"));
    }
}
