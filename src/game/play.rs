//! A single play-mode game against a hidden target

use crate::core::{Feedback, Guess, LetterState, WORD_LENGTH, Word, WordError};
use crate::wordlists::Dictionary;
use std::collections::BTreeMap;

/// Rows on the board
pub const MAX_GUESSES: usize = 6;

/// Game rules that a front end may tweak
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_guesses: usize,
    /// Reject guesses that are not in the dictionary
    pub require_dictionary_word: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_guesses: MAX_GUESSES,
            require_dictionary_word: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("the game is already over")]
    GameOver,
    #[error("invalid guess: {0}")]
    InvalidWord(#[from] WordError),
    #[error("{0} is not in the word list")]
    NotInDictionary(String),
}

/// Board state of one game
#[derive(Debug, Clone)]
pub struct Game {
    target: Word,
    config: GameConfig,
    guesses: Vec<Guess>,
    status: GameStatus,
    keyboard: BTreeMap<u8, LetterState>,
}

impl Game {
    #[must_use]
    pub fn new(target: Word, config: GameConfig) -> Self {
        Self {
            target,
            config,
            guesses: Vec::with_capacity(config.max_guesses),
            status: GameStatus::Playing,
            keyboard: BTreeMap::new(),
        }
    }

    /// Submit a complete guess
    ///
    /// # Errors
    /// Fails without changing the board if the game is over, the guess is
    /// malformed, or it is not a dictionary word while that is required.
    pub fn submit(&mut self, guess: &str, dictionary: &Dictionary) -> Result<&Guess, GameError> {
        if self.status != GameStatus::Playing {
            return Err(GameError::GameOver);
        }

        let word = Word::new(guess.trim())?;
        if self.config.require_dictionary_word && !dictionary.contains(&word) {
            return Err(GameError::NotInDictionary(word.text().to_string()));
        }

        let scored = Guess::scored(word, &self.target);
        self.record_letters(&scored);

        self.status = if scored.feedback.is_perfect() {
            GameStatus::Won
        } else if self.guesses.len() + 1 >= self.config.max_guesses {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        };
        log::debug!("turn {}: {scored} -> {:?}", self.guesses.len() + 1, self.status);

        self.guesses.push(scored);
        Ok(&self.guesses[self.guesses.len() - 1])
    }

    fn record_letters(&mut self, guess: &Guess) {
        for (&letter, &state) in guess.word.chars().iter().zip(guess.feedback.states()) {
            let entry = self.keyboard.entry(letter).or_insert(LetterState::Empty);
            if state.priority() > entry.priority() {
                *entry = state;
            }
        }
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::Playing
    }

    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    /// Index of the row being typed into
    #[must_use]
    pub fn current_row(&self) -> usize {
        self.guesses.len()
    }

    /// Revealed only once the game is over
    #[must_use]
    pub fn target(&self) -> Option<&Word> {
        self.is_over().then_some(&self.target)
    }

    /// Best state seen so far for every guessed letter
    #[must_use]
    pub const fn keyboard(&self) -> &BTreeMap<u8, LetterState> {
        &self.keyboard
    }

    /// One entry per board row; rows not played yet are all empty
    #[must_use]
    pub fn rows(&self) -> Vec<([u8; WORD_LENGTH], Feedback)> {
        (0..self.config.max_guesses)
            .map(|row| {
                self.guesses.get(row).map_or(
                    ([b' '; WORD_LENGTH], Feedback::EMPTY),
                    |g| (*g.word.chars(), g.feedback),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::from_words([
            "CRANE", "TRACE", "SLATE", "BRAVE", "GRATE", "IRATE", "MOODY", "SPEED", "ERASE",
        ])
    }

    fn game(target: &str) -> Game {
        Game::new(Word::new(target).unwrap(), GameConfig::default())
    }

    #[test]
    fn winning_guess_ends_game() {
        let dict = dictionary();
        let mut game = game("CRANE");

        let first = game.submit("trace", &dict).unwrap();
        assert_eq!(first.feedback.to_string(), "-GGYG");
        assert_eq!(game.status(), GameStatus::Playing);
        assert!(game.target().is_none());

        assert!(game.submit("crane", &dict).unwrap().feedback.is_perfect());
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.target().map(Word::text), Some("CRANE"));
        assert_eq!(game.submit("slate", &dict), Err(GameError::GameOver));
    }

    #[test]
    fn running_out_of_rows_loses() {
        let dict = dictionary();
        let mut game = game("CRANE");

        for word in ["SLATE", "BRAVE", "GRATE", "IRATE", "MOODY"] {
            game.submit(word, &dict).unwrap();
            assert_eq!(game.status(), GameStatus::Playing);
        }
        game.submit("SPEED", &dict).unwrap();
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.guesses().len(), MAX_GUESSES);
    }

    #[test]
    fn rejected_guesses_leave_board_untouched() {
        let dict = dictionary();
        let mut game = game("CRANE");

        assert!(matches!(
            game.submit("cran", &dict),
            Err(GameError::InvalidWord(WordError::InvalidLength(4)))
        ));
        assert_eq!(
            game.submit("zzzzz", &dict),
            Err(GameError::NotInDictionary("ZZZZZ".to_string()))
        );
        assert_eq!(game.current_row(), 0);
        assert!(game.keyboard().is_empty());
    }

    #[test]
    fn dictionary_check_can_be_disabled() {
        let dict = dictionary();
        let config = GameConfig {
            require_dictionary_word: false,
            ..GameConfig::default()
        };
        let mut game = Game::new(Word::new("CRANE").unwrap(), config);
        assert!(game.submit("zzzzz", &dict).is_ok());
    }

    #[test]
    fn keyboard_keeps_best_state() {
        let dict = dictionary();
        let mut game = game("CRANE");

        game.submit("TRACE", &dict).unwrap();
        assert_eq!(game.keyboard()[&b'C'], LetterState::Present);
        assert_eq!(game.keyboard()[&b'T'], LetterState::Absent);

        game.submit("CRANE", &dict).unwrap();
        assert_eq!(game.keyboard()[&b'C'], LetterState::Correct);
    }

    #[test]
    fn keyboard_not_downgraded_by_duplicate_letter() {
        let dict = dictionary();
        let mut game = game("ERASE");

        // Both E's of SPEED are present against ERASE
        game.submit("SPEED", &dict).unwrap();
        assert_eq!(game.keyboard()[&b'E'], LetterState::Present);
        assert_eq!(game.keyboard()[&b'D'], LetterState::Absent);
    }

    #[test]
    fn rows_pad_with_empty_feedback() {
        let dict = dictionary();
        let mut game = game("CRANE");
        game.submit("SLATE", &dict).unwrap();

        let rows = game.rows();
        assert_eq!(rows.len(), MAX_GUESSES);
        assert_eq!(&rows[0].0, b"SLATE");
        assert_eq!(rows[1].1, Feedback::EMPTY);
        assert_eq!(&rows[5].0, b"     ");
    }
}
