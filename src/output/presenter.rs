//! Result presentation
//!
//! Turns a [`SearchOutcome`] into a [`ResultView`] that any front end can
//! draw: which words to show, which to emphasize, the match count and the
//! truncation notice. Highlighting is presentation only; it never filters.

use super::formatters::format_count;
use crate::search::SearchOutcome;

/// Word length emphasized by default (classic Wordle)
pub const DEFAULT_HIGHLIGHT_LENGTH: usize = 5;

pub const NOT_SEARCHED_MESSAGE: &str = "Loading word list...";
pub const NO_MATCHES_MESSAGE: &str = "No words match your criteria.";
pub const UNAVAILABLE_MESSAGE: &str = "Failed to load word list. Is the word list available?";

/// One word ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayWord {
    pub text: String,
    pub highlighted: bool,
}

/// What the result area currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultState {
    /// No search has completed yet
    NotSearched,
    /// The last search matched nothing
    NoMatches,
    /// The last search could not reach the corpus
    Unavailable { reason: String },
    /// The last search found words
    Matches(Vec<DisplayWord>),
}

/// Renderable result set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub state: ResultState,
    pub total: usize,
    pub truncation: Option<String>,
}

impl Default for ResultView {
    fn default() -> Self {
        Self::not_searched()
    }
}

impl ResultView {
    #[must_use]
    pub const fn not_searched() -> Self {
        Self {
            state: ResultState::NotSearched,
            total: 0,
            truncation: None,
        }
    }

    /// `"Matches: 1,234"`
    #[must_use]
    pub fn count_line(&self) -> String {
        format!("Matches: {}", format_count(self.total))
    }

    /// Text to show instead of a word list, if any
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match &self.state {
            ResultState::NotSearched => Some(NOT_SEARCHED_MESSAGE.to_string()),
            ResultState::NoMatches => Some(NO_MATCHES_MESSAGE.to_string()),
            ResultState::Unavailable { reason } => Some(format!("{UNAVAILABLE_MESSAGE} ({reason})")),
            ResultState::Matches(_) => None,
        }
    }

    /// Displayed words; empty unless there are matches
    #[must_use]
    pub fn words(&self) -> &[DisplayWord] {
        match &self.state {
            ResultState::Matches(words) => words,
            _ => &[],
        }
    }
}

/// `"Showing first 50 of 120 matches."` when `total` exceeds `shown`
#[must_use]
pub fn truncation_notice(shown: usize, total: usize) -> Option<String> {
    (total > shown).then(|| format!("Showing first {shown} of {} matches.", format_count(total)))
}

/// Build the view for a search outcome
///
/// # Examples
/// ```
/// use wordfinder::output::presenter::{ResultState, present};
/// use wordfinder::search::{MatchResponse, SearchOutcome};
///
/// let outcome = SearchOutcome::Found(MatchResponse {
///     matches: vec!["apple".to_string(), "apples".to_string()],
///     total: 2,
/// });
/// let view = present(&outcome, Some(5));
/// assert!(view.words()[0].highlighted);
/// assert!(!view.words()[1].highlighted);
/// assert_eq!(view.truncation, None);
/// ```
#[must_use]
pub fn present(outcome: &SearchOutcome, highlight_length: Option<usize>) -> ResultView {
    match outcome {
        SearchOutcome::Found(response) if !response.matches.is_empty() => {
            let words = response
                .matches
                .iter()
                .map(|text| DisplayWord {
                    text: text.clone(),
                    highlighted: highlight_length == Some(text.len()),
                })
                .collect();

            ResultView {
                state: ResultState::Matches(words),
                total: response.total,
                truncation: truncation_notice(response.matches.len(), response.total),
            }
        }
        SearchOutcome::Found(_) | SearchOutcome::NoMatches => ResultView {
            state: ResultState::NoMatches,
            total: 0,
            truncation: None,
        },
        SearchOutcome::Unavailable(reason) => ResultView {
            state: ResultState::Unavailable {
                reason: reason.clone(),
            },
            total: 0,
            truncation: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::MatchResponse;

    fn found(count: usize, total: usize) -> SearchOutcome {
        SearchOutcome::Found(MatchResponse {
            matches: (0..count).map(|i| format!("w{i:04}")).collect(),
            total,
        })
    }

    #[test]
    fn truncated_results_get_notice() {
        let view = present(&found(50, 120), None);
        assert_eq!(
            view.truncation.as_deref(),
            Some("Showing first 50 of 120 matches.")
        );
        assert_eq!(view.words().len(), 50);
        assert_eq!(view.count_line(), "Matches: 120");
    }

    #[test]
    fn large_totals_use_separators() {
        let view = present(&found(150, 12_345), None);
        assert_eq!(
            view.truncation.as_deref(),
            Some("Showing first 150 of 12,345 matches.")
        );
        assert_eq!(view.count_line(), "Matches: 12,345");
    }

    #[test]
    fn complete_results_have_no_notice() {
        let view = present(&found(3, 3), None);
        assert_eq!(view.truncation, None);
        assert_eq!(view.message(), None);
    }

    #[test]
    fn highlight_marks_only_matching_length() {
        let outcome = SearchOutcome::Found(MatchResponse {
            matches: vec!["cat".into(), "apple".into(), "melee".into()],
            total: 3,
        });
        let flags: Vec<bool> = present(&outcome, Some(5))
            .words()
            .iter()
            .map(|w| w.highlighted)
            .collect();
        assert_eq!(flags, vec![false, true, true]);

        assert!(present(&outcome, None).words().iter().all(|w| !w.highlighted));
    }

    #[test]
    fn empty_and_unavailable_are_distinct() {
        let empty = present(&SearchOutcome::NoMatches, None);
        let down = present(&SearchOutcome::Unavailable("timeout".into()), None);
        let fresh = ResultView::not_searched();

        assert_eq!(empty.message().as_deref(), Some(NO_MATCHES_MESSAGE));
        assert!(down.message().unwrap().starts_with(UNAVAILABLE_MESSAGE));
        assert_ne!(empty, down);
        assert_ne!(empty, fresh);
        assert_eq!(down.count_line(), "Matches: 0");
    }

    #[test]
    fn found_with_empty_list_shows_no_matches() {
        let view = present(&found(0, 0), None);
        assert_eq!(view.state, ResultState::NoMatches);
    }
}
