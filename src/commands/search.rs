//! One-shot search command
//!
//! Builds a query straight from command-line text, without a session, and
//! evaluates it once.

use crate::core::{LetterSet, Pattern};
use crate::errors::QueryError;
use crate::search::{
    ConstraintQuery, LengthFilter, MatchEvaluator, MatchResponse, QueryRequest, SearchOutcome,
    compile, search,
};
use serde::Serialize;

/// Raw search options as typed by the user
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    pub pattern: Option<String>,
    pub length: Option<String>,
    pub allowed: String,
    pub disallowed: String,
    pub limit: usize,
}

/// Query and response, serialized for `--json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    pub query: QueryRequest,
    #[serde(flatten)]
    pub response: MatchResponse,
}

/// Result of a one-shot search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub query: ConstraintQuery,
    pub outcome: SearchOutcome,
}

impl SearchResult {
    #[must_use]
    pub fn report(&self) -> SearchReport {
        SearchReport {
            query: self.query.to_request(),
            response: self.outcome.clone().into_response(),
        }
    }
}

/// Build the query for a set of raw options
///
/// # Errors
///
/// Returns an error if:
/// - The pattern contains characters other than letters and wildcards
/// - The letter lists contain non-letters
/// - A letter is listed as both allowed and disallowed
pub fn build_query(config: &SearchConfig) -> Result<ConstraintQuery, QueryError> {
    let pattern = config
        .pattern
        .as_deref()
        .map(str::parse::<Pattern>)
        .transpose()?;
    let length = config
        .length
        .as_deref()
        .map_or(LengthFilter::NONE, LengthFilter::parse);
    let allowed = LetterSet::parse(&config.allowed)?;
    let disallowed = LetterSet::parse(&config.disallowed)?;

    let conflict = allowed.intersection(disallowed);
    if !conflict.is_empty() {
        return Err(QueryError::Conflict(conflict.to_string()));
    }

    Ok(compile(pattern, length, allowed, disallowed))
}

/// Build and run a one-shot search
///
/// # Errors
///
/// Returns `QueryError` if the options do not form a valid query.
pub fn run_search<E: MatchEvaluator + ?Sized>(
    config: &SearchConfig,
    evaluator: &E,
) -> Result<SearchResult, QueryError> {
    let query = build_query(config)?;
    log::debug!("searching with {:?}", query.to_request());
    let outcome = search(evaluator, &query, config.limit);
    Ok(SearchResult { query, outcome })
}
