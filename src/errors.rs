//! Error types shared across the crate
//!
//! Malformed user input for the length filter is never an error (it is
//! normalized silently), so only letters, words, patterns, corpus loading
//! and the evaluator boundary carry error types.

use std::io;
use std::path::PathBuf;

/// A character that is not one of the 26 ASCII letters
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a letter (only a-z allowed)")]
pub struct LetterError(pub char);

/// Error type for invalid corpus words
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,

    #[error("Word must contain only ASCII letters, got '{0}'")]
    InvalidCharacter(char),
}

/// Error type for pattern text that cannot be turned into a [`crate::core::Pattern`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("Pattern must not be empty")]
    Empty,

    #[error("Invalid pattern character '{found}' at position {position} (use a-z, '.', '?' or '_')")]
    InvalidCharacter { found: char, position: usize },

    #[error("Pattern has {length} positions, at most {max} allowed")]
    TooLong { length: usize, max: usize },
}

/// A wire-shaped query request that cannot be turned into a constraint query
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] PatternError),

    #[error("Invalid letter constraint: {0}")]
    Letter(#[from] LetterError),

    #[error("Letters '{0}' cannot be both required and excluded")]
    Conflict(String),
}

/// Failure to read a word list from disk
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Word list {0} contains no usable words")]
    NoWords(PathBuf),
}

/// Failure on the evaluator side of the search boundary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvaluatorError {
    #[error("Word list unavailable: {0}")]
    Unavailable(String),

    #[error("Search worker stopped")]
    Disconnected,
}
