//! Letters and letter sets
//!
//! A [`Letter`] is one of the 26 ASCII letters, stored lowercase. A
//! [`LetterSet`] packs any subset of them into a single `u32`, and always
//! iterates alphabetically so anything serialized from it is stable.

use crate::errors::LetterError;
use std::fmt;

/// One of the 26 case-insensitive letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Number of letters in the alphabet
    pub const COUNT: usize = 26;

    /// Create a letter from a character of either case
    ///
    /// # Errors
    /// Returns `LetterError` for anything outside `a-z` / `A-Z`.
    ///
    /// # Examples
    /// ```
    /// use wordfinder::core::Letter;
    ///
    /// let q = Letter::from_char('Q').unwrap();
    /// assert_eq!(q.to_char(), 'q');
    /// assert!(Letter::from_char('7').is_err());
    /// ```
    pub fn from_char(ch: char) -> Result<Self, LetterError> {
        if ch.is_ascii_alphabetic() {
            Ok(Self(ch.to_ascii_lowercase() as u8 - b'a'))
        } else {
            Err(LetterError(ch))
        }
    }

    /// Create a letter from an ASCII byte of either case
    #[inline]
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        if byte.is_ascii_alphabetic() {
            Some(Self(byte.to_ascii_lowercase() - b'a'))
        } else {
            None
        }
    }

    /// Create a letter from its alphabet index (0 = 'a')
    #[inline]
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Alphabet index (0-25)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Lowercase ASCII byte
    #[inline]
    #[must_use]
    pub const fn to_byte(self) -> u8 {
        b'a' + self.0
    }

    /// Lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        self.to_byte() as char
    }

    /// All 26 letters in alphabetical order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT as u8).map(Self)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<char> for Letter {
    type Error = LetterError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Self::from_char(ch)
    }
}

/// A set of letters stored as a 26-bit mask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Collect the letters of a string, failing on the first non-letter
    ///
    /// # Errors
    /// Returns `LetterError` for the first character outside `a-z` / `A-Z`.
    ///
    /// # Examples
    /// ```
    /// use wordfinder::core::LetterSet;
    ///
    /// let set = LetterSet::parse("EaE").unwrap();
    /// assert_eq!(set.len(), 2);
    /// assert_eq!(set.to_string(), "ae");
    /// ```
    pub fn parse(text: &str) -> Result<Self, LetterError> {
        text.chars().try_fold(Self::EMPTY, |set, ch| {
            Letter::from_char(ch).map(|letter| set.with(letter))
        })
    }

    /// Letters of an ASCII byte slice, skipping anything that is not a letter
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        bytes
            .iter()
            .filter_map(|&b| Letter::from_byte(b))
            .collect()
    }

    #[inline]
    pub fn insert(&mut self, letter: Letter) {
        self.0 |= 1 << letter.index();
    }

    #[inline]
    pub fn remove(&mut self, letter: Letter) {
        self.0 &= !(1 << letter.index());
    }

    /// Copy of this set with `letter` added
    #[inline]
    #[must_use]
    pub const fn with(self, letter: Letter) -> Self {
        Self(self.0 | (1 << letter.0))
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: Letter) -> bool {
        self.0 & (1 << letter.0) != 0
    }

    /// True if every letter of `other` is in `self`
    #[inline]
    #[must_use]
    pub const fn contains_all(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if the sets share at least one letter
    #[inline]
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = Letter> {
        Letter::all().filter(move |&letter| self.contains(letter))
    }

    /// Lowercase characters in alphabetical order
    #[must_use]
    pub fn to_chars(self) -> Vec<char> {
        self.iter().map(Letter::to_char).collect()
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
