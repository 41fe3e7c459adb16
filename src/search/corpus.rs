//! In-process word corpus
//!
//! The corpus is sorted, de-duplicated and indexed by word length. Queries
//! that pin down a length scan only that bucket; the scan itself runs in
//! parallel with rayon while keeping corpus order.

use super::evaluator::{MatchEvaluator, MatchResponse};
use super::ConstraintQuery;
use crate::core::Word;
use crate::errors::EvaluatorError;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Displayed-match cap used when none is configured
pub const DEFAULT_RESULT_LIMIT: usize = 150;

/// Sorted, de-duplicated word list with a by-length index
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    words: Vec<Word>,
    by_length: FxHashMap<usize, Vec<usize>>,
}

impl Corpus {
    /// Build a corpus from words in any order, dropping duplicates
    ///
    /// # Examples
    /// ```
    /// use wordfinder::core::Word;
    /// use wordfinder::search::Corpus;
    ///
    /// let words = ["pear", "Apple", "apple"].map(|w| Word::new(w).unwrap());
    /// let corpus = Corpus::new(words.to_vec());
    /// assert_eq!(corpus.len(), 2);
    /// assert_eq!(corpus.words()[0].text(), "apple");
    /// ```
    #[must_use]
    pub fn new(mut words: Vec<Word>) -> Self {
        words.sort_unstable_by(|a, b| a.text().cmp(b.text()));
        words.dedup_by(|a, b| a.text() == b.text());

        let mut by_length: FxHashMap<usize, Vec<usize>> = FxHashMap::default();
        for (index, word) in words.iter().enumerate() {
            by_length.entry(word.len()).or_default().push(index);
        }

        log::debug!(
            "corpus built: {} words in {} length buckets",
            words.len(),
            by_length.len()
        );

        Self { words, by_length }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in corpus order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words of a given length
    #[must_use]
    pub fn count_of_length(&self, length: usize) -> usize {
        self.by_length.get(&length).map_or(0, Vec::len)
    }

    /// Every word satisfying the query, in corpus order
    #[must_use]
    pub fn find_matches(&self, query: &ConstraintQuery) -> Vec<&Word> {
        match query.length_hint() {
            Some(length) => self.by_length.get(&length).map_or_else(Vec::new, |bucket| {
                bucket
                    .par_iter()
                    .map(|&index| &self.words[index])
                    .filter(|word| query.matches(word))
                    .collect()
            }),
            None => self
                .words
                .par_iter()
                .filter(|word| query.matches(word))
                .collect(),
        }
    }
}

impl MatchEvaluator for Corpus {
    fn evaluate(
        &self,
        query: &ConstraintQuery,
        limit: usize,
    ) -> Result<MatchResponse, EvaluatorError> {
        let found = self.find_matches(query);
        let total = found.len();
        let matches = found
            .into_iter()
            .take(limit)
            .map(|word| word.text().to_string())
            .collect();

        Ok(MatchResponse { matches, total })
    }

    fn corpus_size(&self) -> Result<usize, EvaluatorError> {
        Ok(self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterSet;
    use crate::search::{LengthFilter, compile};
    use crate::wordlists::loader::words_from_slice;

    fn corpus(words: &[&str]) -> Corpus {
        Corpus::new(words_from_slice(words))
    }

    fn query(pattern: Option<&str>, length: &str, allowed: &str, disallowed: &str) -> ConstraintQuery {
        compile(
            pattern.and_then(|p| p.parse().ok()),
            LengthFilter::parse(length),
            LetterSet::parse(allowed).unwrap(),
            LetterSet::parse(disallowed).unwrap(),
        )
    }

    fn texts(words: &[&Word]) -> Vec<String> {
        words.iter().map(|w| w.text().to_string()).collect()
    }

    #[test]
    fn new_sorts_and_dedups() {
        let c = corpus(&["pear", "apple", "Pear", "fig"]);
        let words: Vec<&str> = c.words().iter().map(Word::text).collect();
        assert_eq!(words, vec!["apple", "fig", "pear"]);
        assert_eq!(c.count_of_length(4), 1);
        assert_eq!(c.count_of_length(9), 0);
    }

    #[test]
    fn matches_keep_corpus_order() {
        let c = corpus(&["grape", "apple", "angle", "melee", "abbey"]);
        let found = c.find_matches(&query(Some("a...."), "", "", ""));
        assert_eq!(texts(&found), vec!["abbey", "angle", "apple"]);
    }

    #[test]
    fn bucket_scan_agrees_with_full_scan() {
        let c = corpus(&["cat", "cart", "chart", "cheat", "coat", "act", "charts"]);
        let with_length = query(None, "5", "c", "");
        let mut no_length = query(None, "", "c", "");
        let full: Vec<&Word> = c
            .find_matches(&no_length)
            .into_iter()
            .filter(|w| w.len() == 5)
            .collect();
        assert_eq!(c.find_matches(&with_length), full);

        // Same result when the length comes from the pattern instead
        no_length.pattern = "c....".parse().ok();
        assert_eq!(c.find_matches(&no_length), full);
    }

    #[test]
    fn evaluate_truncates_but_counts_all() {
        let c = corpus(&["aa", "ab", "ac", "ad", "ae"]);
        let response = c.evaluate(&query(Some("a."), "", "", ""), 2).unwrap();
        assert_eq!(response.total, 5);
        assert_eq!(response.matches, vec!["aa", "ab"]);
    }

    #[test]
    fn evaluate_is_deterministic() {
        let c = corpus(&["melee", "where", "theme", "apple", "grape"]);
        let q = query(None, "", "e", "a");
        assert_eq!(c.evaluate(&q, 10).unwrap(), c.evaluate(&q, 10).unwrap());
    }

    #[test]
    fn unknown_length_bucket_is_empty() {
        let c = corpus(&["apple"]);
        assert!(c.find_matches(&query(None, "12", "", "")).is_empty());
    }

    #[test]
    fn corpus_size_reports_len() {
        assert_eq!(corpus(&["one", "two", "two"]).corpus_size(), Ok(2));
    }
}
