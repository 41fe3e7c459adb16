//! Command implementations

pub mod search;
pub mod simple;
pub mod stats;

pub use search::{SearchConfig, SearchReport, SearchResult, build_query, run_search};
pub use simple::run_simple;
pub use stats::corpus_stats;
