//! Runtime settings
//!
//! The binary fills [`Settings`] from its command line; everything below
//! the CLI layer takes its configuration from here.

use crate::errors::LoadError;
use crate::output::presenter::DEFAULT_HIGHLIGHT_LENGTH;
use crate::search::{Corpus, DEFAULT_RESULT_LIMIT, MatchEvaluator, OfflineEvaluator};
use crate::wordlists::{embedded_corpus, loader::load_corpus};
use std::path::PathBuf;

/// Where the corpus comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordlistSource {
    /// The word list compiled into the binary
    Embedded,
    /// A file with one word per line
    File(PathBuf),
}

impl WordlistSource {
    /// `"all"` selects the embedded list, anything else is a path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "all" | "embedded" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// Load the corpus
    ///
    /// # Errors
    /// Returns `LoadError` if a word list file cannot be read or is empty.
    pub fn load(&self) -> Result<Corpus, LoadError> {
        match self {
            Self::Embedded => Ok(embedded_corpus()),
            Self::File(path) => load_corpus(path),
        }
    }
}

/// Settings shared by every command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub wordlist: WordlistSource,
    /// Most matches returned per search
    pub result_limit: usize,
    /// Word length to emphasize, if any
    pub highlight_length: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            wordlist: WordlistSource::Embedded,
            result_limit: DEFAULT_RESULT_LIMIT,
            highlight_length: Some(DEFAULT_HIGHLIGHT_LENGTH),
        }
    }
}

impl Settings {
    /// Build settings from raw option values
    ///
    /// A zero limit is raised to one; a zero highlight length disables highlighting.
    #[must_use]
    pub fn new(wordlist: &str, result_limit: usize, highlight_length: usize) -> Self {
        Self {
            wordlist: WordlistSource::from_arg(wordlist),
            result_limit: result_limit.max(1),
            highlight_length: (highlight_length > 0).then_some(highlight_length),
        }
    }

    /// Evaluator for interactive use
    ///
    /// A corpus that fails to load becomes an [`OfflineEvaluator`], so the
    /// session still starts and reports the failure on its first search.
    #[must_use]
    pub fn open_evaluator(&self) -> Box<dyn MatchEvaluator> {
        match self.wordlist.load() {
            Ok(corpus) => Box::new(corpus),
            Err(err) => {
                log::warn!("{err}");
                Box::new(OfflineEvaluator::new(err.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wordlist_arg_parsing() {
        assert_eq!(WordlistSource::from_arg("all"), WordlistSource::Embedded);
        assert_eq!(
            WordlistSource::from_arg("words.txt"),
            WordlistSource::File(PathBuf::from("words.txt"))
        );
    }

    #[test]
    fn settings_normalize_options() {
        let settings = Settings::new("all", 0, 0);
        assert_eq!(settings.result_limit, 1);
        assert_eq!(settings.highlight_length, None);

        let settings = Settings::new("all", 50, 5);
        assert_eq!(settings.highlight_length, Some(5));
    }

    #[test]
    fn default_settings_match_cli_defaults() {
        assert_eq!(Settings::default(), Settings::new("all", 150, 5));
    }

    #[test]
    fn missing_file_opens_offline_evaluator() {
        let settings = Settings::new("/no/such/wordlist.txt", 10, 5);
        let evaluator = settings.open_evaluator();
        assert!(evaluator.corpus_size().is_err());
    }

    #[test]
    fn embedded_evaluator_has_words() {
        let evaluator = Settings::default().open_evaluator();
        assert!(evaluator.corpus_size().unwrap() > 0);
    }
}
