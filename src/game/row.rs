//! Editable letter row with a focused cell

use crate::core::{Feedback, WORD_LENGTH, Word, WordError};

/// Letters typed into the active row
///
/// Typing fills the focused cell and moves focus right; backspace clears the
/// focused cell and moves focus left.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowInput {
    cells: [Option<u8>; WORD_LENGTH],
    focus: usize,
}

impl RowInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Type a letter; anything but an ASCII letter is ignored
    pub fn push(&mut self, letter: char) {
        if !letter.is_ascii_alphabetic() {
            return;
        }
        self.cells[self.focus] = Some(letter.to_ascii_uppercase() as u8);
        if self.focus + 1 < WORD_LENGTH {
            self.focus += 1;
        }
    }

    pub fn backspace(&mut self) {
        self.cells[self.focus] = None;
        self.focus = self.focus.saturating_sub(1);
    }

    /// Move focus to a cell; out-of-range indices clamp to the last cell
    pub fn focus(&mut self, index: usize) {
        self.focus = index.min(WORD_LENGTH - 1);
    }

    #[must_use]
    pub const fn focused(&self) -> usize {
        self.focus
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Row contents with blanks as spaces
    #[must_use]
    pub fn text(&self) -> String {
        self.cells
            .iter()
            .map(|cell| cell.map_or(' ', char::from))
            .collect()
    }

    /// The typed word, once every cell is filled
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` with the number of filled cells if
    /// the row is incomplete.
    pub fn to_word(&self) -> Result<Word, WordError> {
        if !self.is_complete() {
            let filled = self.cells.iter().flatten().count();
            return Err(WordError::InvalidLength(filled));
        }
        Word::new(self.text())
    }

    /// Color the row against `target`
    ///
    /// A complete row is scored by the evaluator. An incomplete row is not
    /// evaluated at all; every cell stays empty.
    #[must_use]
    pub fn feedback_against(&self, target: &Word) -> Feedback {
        match self.to_word() {
            Ok(word) => Feedback::evaluate(&word, target),
            Err(_) => Feedback::EMPTY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> RowInput {
        let mut row = RowInput::new();
        text.chars().for_each(|c| row.push(c));
        row
    }

    #[test]
    fn typing_advances_focus() {
        let row = typed("cr");
        assert_eq!(row.text(), "CR   ");
        assert_eq!(row.focused(), 2);
    }

    #[test]
    fn focus_stays_on_last_cell() {
        let mut row = typed("cranes");
        assert_eq!(row.text(), "CRANS");
        assert_eq!(row.focused(), WORD_LENGTH - 1);
        row.push('e');
        assert_eq!(row.text(), "CRANE");
    }

    #[test]
    fn non_letters_are_ignored() {
        let row = typed("c1r ");
        assert_eq!(row.text(), "CR   ");
    }

    #[test]
    fn backspace_clears_then_steps_back() {
        let mut row = typed("crane");
        row.backspace();
        assert_eq!(row.text(), "CRAN ");
        assert_eq!(row.focused(), 3);

        row.backspace();
        assert_eq!(row.text(), "CRA  ");

        let mut empty = RowInput::new();
        empty.backspace();
        assert_eq!(empty.focused(), 0);
    }

    #[test]
    fn focus_clamps() {
        let mut row = RowInput::new();
        row.focus(99);
        assert_eq!(row.focused(), WORD_LENGTH - 1);
        row.push('x');
        assert_eq!(row.text(), "    X");
    }

    #[test]
    fn incomplete_row_is_not_evaluated() {
        let target = Word::new("CRANE").unwrap();
        let row = typed("cra");

        assert!(!row.is_complete());
        assert_eq!(row.to_word(), Err(WordError::InvalidLength(3)));
        assert_eq!(row.feedback_against(&target), Feedback::EMPTY);
    }

    #[test]
    fn complete_row_is_evaluated() {
        let target = Word::new("CRANE").unwrap();
        let row = typed("trace");

        assert!(row.is_complete());
        assert_eq!(row.feedback_against(&target).to_string(), "-GGYG");
    }

    #[test]
    fn clear_resets_row() {
        let mut row = typed("crane");
        row.clear();
        assert_eq!(row, RowInput::new());
    }
}
