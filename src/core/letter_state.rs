//! Per-position feedback classification

use std::fmt;

/// Classification of one letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterState {
    /// Right letter, right position
    Correct,
    /// Letter occurs elsewhere in the target
    Present,
    /// Letter does not occur (or all its occurrences are already accounted for)
    Absent,
    /// Not evaluated yet: blank cells and future rows
    #[default]
    Empty,
}

impl LetterState {
    /// Weight contributed to a feedback signature
    #[inline]
    #[must_use]
    pub const fn weight(self) -> u8 {
        match self {
            Self::Correct => 4,
            Self::Present => 2,
            Self::Absent => 1,
            Self::Empty => 0,
        }
    }

    /// Rank used when merging states for the same letter; higher wins
    #[inline]
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Correct => 3,
            Self::Present => 2,
            Self::Absent => 1,
            Self::Empty => 0,
        }
    }

    /// Next state when a player toggles a feedback cell
    ///
    /// Absent → Present → Correct → Absent. An unset cell starts at Present.
    #[must_use]
    pub const fn cycle(self) -> Self {
        match self {
            Self::Absent | Self::Empty => Self::Present,
            Self::Present => Self::Correct,
            Self::Correct => Self::Absent,
        }
    }

    /// Parse a single feedback symbol
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/'.'/⬜/⬛ for absent
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    /// ASCII symbol, the inverse of `from_symbol` for evaluated states
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
            Self::Empty => ' ',
        }
    }

    /// Emoji square used when sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
            Self::Empty => '⬜',
        }
    }
}

impl fmt::Display for LetterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
            Self::Empty => "empty",
        };
        f.write_str(name)
    }
}
