//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.
//! Entries that are not plain letters (hyphenated, digits, apostrophes) are
//! skipped rather than rejected.

use crate::core::Word;
use crate::errors::LoadError;
use crate::search::Corpus;
use std::fs;
use std::path::Path;

/// Load words from a file, one per line
///
/// Returns every valid entry, skipping blank and invalid lines.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordfinder::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words: Vec<Word> = content
        .lines()
        .filter_map(|line| Word::new(line).ok())
        .collect();

    log::info!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Load a file into a searchable corpus
///
/// # Errors
///
/// Returns `LoadError` if the file cannot be read or has no usable words.
pub fn load_corpus<P: AsRef<Path>>(path: P) -> Result<Corpus, LoadError> {
    let path = path.as_ref();
    let words = load_from_file(path)?;
    if words.is_empty() {
        return Err(LoadError::NoWords(path.to_path_buf()));
    }
    Ok(Corpus::new(words))
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordfinder::wordlists::loader::words_from_slice;
/// use wordfinder::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
