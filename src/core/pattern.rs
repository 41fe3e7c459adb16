//! Positional word patterns
//!
//! A pattern holds one slot per word position: either a literal letter or a
//! wildcard, written as `.`. `"a...."` is a five-letter word starting with A.
//!
//! Patterns are capped at [`MAX_PATTERN_LENGTH`] positions; anything past the
//! cap is ignored rather than rejected.

use super::{Letter, LetterSet, Word};
use crate::errors::PatternError;
use std::fmt;
use std::str::FromStr;

/// Longest pattern (and number of letter boxes) the tool works with
pub const MAX_PATTERN_LENGTH: usize = 15;

/// Character used for an empty position
pub const WILDCARD: char = '.';

/// Positional template: one `Some(letter)` or `None` (wildcard) per position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern(Vec<Option<Letter>>);

impl Pattern {
    /// A pattern of `length` wildcards, capped at [`MAX_PATTERN_LENGTH`]
    #[must_use]
    pub fn wildcards(length: usize) -> Self {
        Self(vec![None; length.min(MAX_PATTERN_LENGTH)])
    }

    /// Build a pattern from ordered letter boxes
    ///
    /// Each slot contributes its letter or a wildcard. Only the first
    /// [`MAX_PATTERN_LENGTH`] slots are considered. Returns `None` when there
    /// are no slots at all.
    ///
    /// # Examples
    /// ```
    /// use wordfinder::core::{Letter, Pattern};
    ///
    /// let a = Letter::from_char('a').ok();
    /// let pattern = Pattern::from_slots(&[a, None, None, None, None]).unwrap();
    /// assert_eq!(pattern.to_string(), "a....");
    ///
    /// assert!(Pattern::from_slots(&[]).is_none());
    /// ```
    #[must_use]
    pub fn from_slots(slots: &[Option<Letter>]) -> Option<Self> {
        if slots.is_empty() {
            return None;
        }
        Some(Self(
            slots.iter().take(MAX_PATTERN_LENGTH).copied().collect(),
        ))
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The slot at a position
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<Option<Letter>> {
        self.0.get(position).copied()
    }

    /// True if every position is a wildcard
    #[must_use]
    pub fn is_all_wildcards(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    /// Letters placed literally somewhere in the pattern
    #[must_use]
    pub fn fixed_letters(&self) -> LetterSet {
        self.0.iter().flatten().copied().collect()
    }

    /// The slots, in position order
    #[must_use]
    pub fn slots(&self) -> &[Option<Letter>] {
        &self.0
    }

    /// Check length and every literal position against a word
    ///
    /// An empty pattern places no constraint at all.
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        if self.0.is_empty() {
            return true;
        }
        if word.len() != self.0.len() {
            return false;
        }
        self.0
            .iter()
            .zip(word.text().bytes())
            .all(|(slot, byte)| slot.is_none_or(|letter| letter.to_byte() == byte))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.0 {
            match slot {
                Some(letter) => write!(f, "{letter}")?,
                None => write!(f, "{WILDCARD}")?,
            }
        }
        Ok(())
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    /// Parse pattern text such as `"A..le"` or `"a?p_e"`
    ///
    /// Letters of either case are literals; `.`, `?` and `_` are wildcards.
    /// Characters beyond [`MAX_PATTERN_LENGTH`] are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PatternError::Empty);
        }

        s.chars()
            .take(MAX_PATTERN_LENGTH)
            .enumerate()
            .map(|(position, ch)| match ch {
                '.' | '?' | '_' => Ok(None),
                _ => Letter::from_char(ch)
                    .map(Some)
                    .map_err(|_| PatternError::InvalidCharacter { found: ch, position }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}
