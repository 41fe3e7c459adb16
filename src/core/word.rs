//! Corpus word representation
//!
//! A Word stores a lowercase dictionary word along with the set of letters it
//! contains, so inclusion and exclusion checks are a single mask operation.

use super::{Letter, LetterSet};
use crate::errors::WordError;
use std::fmt;

/// A lowercase dictionary word with letter-set tracking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: LetterSet,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and the text is lowercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The trimmed text is empty
    /// - Contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use wordfinder::core::Word;
    ///
    /// let word = Word::new("Apple").unwrap();
    /// assert_eq!(word.text(), "apple");
    ///
    /// assert!(Word::new("don't").is_err());
    /// assert!(Word::new("   ").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(bad) = text.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacter(bad));
        }

        let letters = LetterSet::from_bytes(text.as_bytes());

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; empty words are rejected at construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a position, if the word is long enough
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Option<Letter> {
        self.text
            .as_bytes()
            .get(position)
            .and_then(|&b| Letter::from_byte(b))
    }

    /// The set of distinct letters in the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub const fn has_letter(&self, letter: Letter) -> bool {
        self.letters.contains(letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::from_char(ch).unwrap()
    }

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_any_length() {
        assert_eq!(Word::new("a").unwrap().len(), 1);
        assert_eq!(Word::new("administration").unwrap().len(), 14);
    }

    #[test]
    fn word_creation_normalizes_case_and_whitespace() {
        assert_eq!(Word::new("  MeLeE\n").unwrap().text(), "melee");
    }

    #[test]
    fn word_creation_invalid() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacter('3')));
        assert_eq!(Word::new("ice cream"), Err(WordError::InvalidCharacter(' ')));
        assert!(Word::new("naïve").is_err());
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("apple").unwrap();
        assert_eq!(word.letter_at(0), Some(letter('a')));
        assert_eq!(word.letter_at(4), Some(letter('e')));
        assert_eq!(word.letter_at(5), None);
    }

    #[test]
    fn word_letters_are_distinct() {
        let word = Word::new("melee").unwrap();
        assert_eq!(word.letters().len(), 3);
        assert!(word.has_letter(letter('m')));
        assert!(word.has_letter(letter('e')));
        assert!(!word.has_letter(letter('a')));
    }

    #[test]
    fn word_display() {
        let word = Word::new("grape").unwrap();
        assert_eq!(format!("{word}"), "grape");
    }

    #[test]
    fn word_equality_case_insensitive() {
        assert_eq!(Word::new("APPLE").unwrap(), Word::new("apple").unwrap());
        assert_ne!(Word::new("apple").unwrap(), Word::new("grape").unwrap());
    }
}
