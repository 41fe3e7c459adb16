//! The evaluator boundary
//!
//! Whatever actually scans the corpus sits behind [`MatchEvaluator`]. Callers
//! never see its errors directly: [`search`] and [`corpus_total`] degrade
//! failures into an explicit [`SearchOutcome::Unavailable`] or a zero count,
//! so "could not search" stays distinguishable from "searched, found nothing".

use super::ConstraintQuery;
use crate::errors::EvaluatorError;
use serde::{Deserialize, Serialize};

/// Response shape of a search: bounded match list plus the full count
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchResponse {
    /// First matches in corpus order, at most the requested limit
    pub matches: Vec<String>,
    /// Number of corpus words satisfying the query
    pub total: usize,
}

impl MatchResponse {
    /// True if the match list is shorter than the true total
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.total > self.matches.len()
    }
}

/// Response shape of the corpus statistics read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CorpusStats {
    pub total: usize,
}

/// Anything that can evaluate constraint queries over a word corpus
///
/// Implementations must apply [`ConstraintQuery::matches`] to every word,
/// count all matches in `total` and return the first `limit` of them in
/// corpus order, so repeated identical queries give identical responses.
pub trait MatchEvaluator: Send {
    /// Evaluate a query, returning at most `limit` matches
    ///
    /// # Errors
    /// Returns `EvaluatorError` if the corpus cannot be reached.
    fn evaluate(&self, query: &ConstraintQuery, limit: usize)
    -> Result<MatchResponse, EvaluatorError>;

    /// Number of words in the whole corpus
    ///
    /// # Errors
    /// Returns `EvaluatorError` if the corpus cannot be reached.
    fn corpus_size(&self) -> Result<usize, EvaluatorError>;
}

impl<E: MatchEvaluator + ?Sized> MatchEvaluator for Box<E> {
    fn evaluate(
        &self,
        query: &ConstraintQuery,
        limit: usize,
    ) -> Result<MatchResponse, EvaluatorError> {
        (**self).evaluate(query, limit)
    }

    fn corpus_size(&self) -> Result<usize, EvaluatorError> {
        (**self).corpus_size()
    }
}

/// Evaluator standing in for a corpus that could not be loaded
///
/// Every call fails with [`EvaluatorError::Unavailable`], which lets a
/// session start and report the failure instead of aborting.
#[derive(Debug, Clone)]
pub struct OfflineEvaluator {
    reason: String,
}

impl OfflineEvaluator {
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl MatchEvaluator for OfflineEvaluator {
    fn evaluate(&self, _: &ConstraintQuery, _: usize) -> Result<MatchResponse, EvaluatorError> {
        Err(EvaluatorError::Unavailable(self.reason.clone()))
    }

    fn corpus_size(&self) -> Result<usize, EvaluatorError> {
        Err(EvaluatorError::Unavailable(self.reason.clone()))
    }
}

/// Result of one search, as seen by the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// At least one word matched
    Found(MatchResponse),
    /// The corpus was searched and nothing matched
    NoMatches,
    /// The corpus could not be searched
    Unavailable(String),
}

impl SearchOutcome {
    /// Classify an evaluator result
    #[must_use]
    pub fn from_result(result: Result<MatchResponse, EvaluatorError>) -> Self {
        match result {
            Ok(response) if response.total == 0 => Self::NoMatches,
            Ok(response) => Self::Found(response),
            Err(err) => Self::Unavailable(err.to_string()),
        }
    }

    /// Total matches; zero unless words were found
    #[must_use]
    pub const fn total(&self) -> usize {
        match self {
            Self::Found(response) => response.total,
            Self::NoMatches | Self::Unavailable(_) => 0,
        }
    }

    /// The response with failures collapsed to an empty one
    #[must_use]
    pub fn into_response(self) -> MatchResponse {
        match self {
            Self::Found(response) => response,
            Self::NoMatches | Self::Unavailable(_) => MatchResponse::default(),
        }
    }
}

/// Run a query, degrading evaluator failures to [`SearchOutcome::Unavailable`]
///
/// A limit of zero is raised to one so a non-empty result always shows a word.
pub fn search<E: MatchEvaluator + ?Sized>(
    evaluator: &E,
    query: &ConstraintQuery,
    limit: usize,
) -> SearchOutcome {
    let result = evaluator.evaluate(query, limit.max(1));
    if let Err(err) = &result {
        log::warn!("search failed, showing no results: {err}");
    }
    SearchOutcome::from_result(result)
}

/// Corpus size, or zero if the corpus cannot be reached
pub fn corpus_total<E: MatchEvaluator + ?Sized>(evaluator: &E) -> usize {
    evaluator.corpus_size().unwrap_or_else(|err| {
        log::warn!("could not read corpus size: {err}");
        0
    })
}
