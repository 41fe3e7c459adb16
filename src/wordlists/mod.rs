//! Word lists
//!
//! Provides the embedded corpus and loading of custom word lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::search::Corpus;

/// The embedded corpus, ready to search
#[must_use]
pub fn embedded_corpus() -> Corpus {
    Corpus::new(loader::words_from_slice(WORDS))
}
