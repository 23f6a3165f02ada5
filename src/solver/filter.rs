//! Candidate filtering from guess feedback
//!
//! A guess is reduced to three disjoint letter sets (correct, present,
//! absent, in that precedence) plus the positional facts it reveals. A
//! candidate survives only if it is consistent with all of them.

use crate::core::{Guess, LetterState, WORD_LENGTH, Word};
use rustc_hash::FxHashSet;

/// Constraints a single guess places on the target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterConstraints {
    correct: FxHashSet<u8>,
    present: FxHashSet<u8>,
    absent: FxHashSet<u8>,
    /// Letter fixed at each correct position
    fixed: [Option<u8>; WORD_LENGTH],
    /// Guess letter at each position whose letter is in `present`
    excluded: [Option<u8>; WORD_LENGTH],
}

impl LetterConstraints {
    /// Derive the constraints of one guess
    #[must_use]
    pub fn from_guess(guess: &Guess) -> Self {
        let letters = guess.word.chars();
        let states = guess.feedback.states();

        let letters_with = |wanted: LetterState| -> FxHashSet<u8> {
            letters
                .iter()
                .zip(states)
                .filter(|&(_, &state)| state == wanted)
                .map(|(&letter, _)| letter)
                .collect()
        };

        let correct = letters_with(LetterState::Correct);
        let present: FxHashSet<u8> = letters_with(LetterState::Present)
            .into_iter()
            .filter(|letter| !correct.contains(letter))
            .collect();
        let absent: FxHashSet<u8> = letters_with(LetterState::Absent)
            .into_iter()
            .filter(|letter| !correct.contains(letter) && !present.contains(letter))
            .collect();

        let mut fixed = [None; WORD_LENGTH];
        let mut excluded = [None; WORD_LENGTH];
        for (i, (&letter, &state)) in letters.iter().zip(states).enumerate() {
            if state == LetterState::Correct {
                fixed[i] = Some(letter);
            }
            if present.contains(&letter) {
                excluded[i] = Some(letter);
            }
        }

        Self {
            correct,
            present,
            absent,
            fixed,
            excluded,
        }
    }

    /// Letters confirmed at some position
    #[must_use]
    pub const fn correct_letters(&self) -> &FxHashSet<u8> {
        &self.correct
    }

    /// Letters known to occur somewhere, not yet placed
    #[must_use]
    pub const fn present_letters(&self) -> &FxHashSet<u8> {
        &self.present
    }

    /// Letters known not to occur
    #[must_use]
    pub const fn absent_letters(&self) -> &FxHashSet<u8> {
        &self.absent
    }

    /// Check whether `candidate` could still be the target
    #[must_use]
    pub fn admits(&self, candidate: &Word) -> bool {
        if self.absent.iter().any(|&letter| candidate.has_letter(letter)) {
            return false;
        }

        if !self.present.iter().all(|&letter| candidate.has_letter(letter)) {
            return false;
        }

        candidate.chars().iter().enumerate().all(|(i, &letter)| {
            self.excluded[i] != Some(letter) && self.fixed[i].is_none_or(|fixed| fixed == letter)
        })
    }
}

/// Keep the candidates consistent with `guess`
///
/// Never mutates `pool`; the result keeps pool order and is never larger.
///
/// # Examples
/// ```
/// use wordle_engine::core::{Guess, Word};
/// use wordle_engine::solver::filter;
///
/// let pool: Vec<Word> = ["crane", "trace", "slate", "brave"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let target = Word::new("crane").unwrap();
/// let guess = Guess::scored(Word::new("trace").unwrap(), &target);
///
/// let remaining = filter(&guess, &pool);
/// assert_eq!(remaining, vec![target]);
/// ```
#[must_use]
pub fn filter(guess: &Guess, pool: &[Word]) -> Vec<Word> {
    let constraints = LetterConstraints::from_guess(guess);
    pool.iter()
        .filter(|candidate| constraints.admits(candidate))
        .cloned()
        .collect()
}

/// Borrowing variant of [`filter`] for pools held elsewhere
#[must_use]
pub fn filter_refs<'a>(guess: &Guess, pool: &[&'a Word]) -> Vec<&'a Word> {
    let constraints = LetterConstraints::from_guess(guess);
    pool.iter()
        .copied()
        .filter(|candidate| constraints.admits(candidate))
        .collect()
}
