//! Core domain types
//!
//! Letters, corpus words, patterns, the letter boxes they are edited in and
//! the classification table. Everything here is pure state with no I/O.

mod boxes;
mod classifier;
mod letter;
mod pattern;
mod word;

pub use boxes::{DEFAULT_BOX_COUNT, PositionBoxes};
pub use classifier::{Classification, LetterClassifier};
pub use letter::{Letter, LetterSet};
pub use pattern::{MAX_PATTERN_LENGTH, Pattern, WILDCARD};
pub use word::Word;
