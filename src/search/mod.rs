//! Query compilation and evaluation
//!
//! [`compile`] turns session state into a [`ConstraintQuery`]; a
//! [`MatchEvaluator`] (normally a [`Corpus`]) answers it, usually through a
//! [`SearchDispatcher`] running on a worker thread.

pub mod corpus;
pub mod dispatch;
pub mod evaluator;
mod query;

pub use corpus::{Corpus, DEFAULT_RESULT_LIMIT};
pub use dispatch::{SearchDispatcher, SearchReply, SearchRequest};
pub use evaluator::{
    CorpusStats, MatchEvaluator, MatchResponse, OfflineEvaluator, SearchOutcome, corpus_total,
    search,
};
pub use query::{ConstraintQuery, LengthFilter, QueryRequest, compile};
