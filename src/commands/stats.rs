//! Corpus statistics command

use crate::search::{CorpusStats, MatchEvaluator, corpus_total};

/// Read the corpus statistics; an unreachable corpus counts as empty
#[must_use]
pub fn corpus_stats<E: MatchEvaluator + ?Sized>(evaluator: &E) -> CorpusStats {
    CorpusStats {
        total: corpus_total(evaluator),
    }
}
