//! Word Finder
//!
//! Find dictionary words from a partial pattern plus letters that must or
//! must not appear. A Wordle companion, with a terminal UI and CLI modes.
//!
//! # Quick Start
//!
//! ```rust
//! use wordfinder::core::Pattern;
//! use wordfinder::search::{LengthFilter, compile, search};
//! use wordfinder::core::LetterSet;
//! use wordfinder::wordlists::embedded_corpus;
//!
//! let corpus = embedded_corpus();
//!
//! // Five letters, starting "ap", containing an "l", without an "s"
//! let pattern: Pattern = "ap...".parse().unwrap();
//! let allowed = LetterSet::parse("l").unwrap();
//! let disallowed = LetterSet::parse("s").unwrap();
//! let query = compile(Some(pattern), LengthFilter::NONE, allowed, disallowed);
//!
//! let outcome = search(&corpus, &query, 150);
//! assert!(outcome.into_response().matches.contains(&"apple".to_string()));
//! ```

// Core domain types
pub mod core;

// Query compilation, evaluation and the search worker
pub mod search;

// Interactive session state
pub mod session;

// Word lists
pub mod wordlists;

// Runtime settings
pub mod config;

pub mod errors;
pub mod log;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
