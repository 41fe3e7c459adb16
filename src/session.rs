//! Interactive session state
//!
//! The session owns the letter boxes, the classification table, the length
//! filter and the current result view. Every user action goes through one of
//! its methods, which reconciles inline letters before anything reads the
//! classifier. Searches are issued as numbered [`SearchRequest`]s and a reply
//! is applied only if it answers the most recent request.

use crate::core::{
    Classification, DEFAULT_BOX_COUNT, Letter, LetterClassifier, Pattern, PositionBoxes,
};
use crate::output::presenter::{ResultView, present};
use crate::search::{ConstraintQuery, LengthFilter, SearchReply, SearchRequest, compile};

/// Monotonic request numbering for last-issued-wins replies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestTracker {
    latest_issued: u64,
    latest_applied: u64,
}

impl RequestTracker {
    /// Allocate the next sequence number
    pub const fn issue(&mut self) -> u64 {
        self.latest_issued += 1;
        self.latest_issued
    }

    /// True if `seq` is the most recently issued number
    #[must_use]
    pub const fn is_latest(&self, seq: u64) -> bool {
        seq == self.latest_issued
    }

    /// Record that the latest request's reply has been applied
    pub const fn mark_applied(&mut self, seq: u64) {
        self.latest_applied = seq;
    }

    /// True while the latest issued request has no applied reply
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.latest_issued != self.latest_applied
    }
}

/// State of one interactive search session
#[derive(Debug, Clone)]
pub struct Session {
    boxes: PositionBoxes,
    classifier: LetterClassifier,
    length: LengthFilter,
    length_input: String,
    highlight_length: Option<usize>,
    corpus_total: usize,
    tracker: RequestTracker,
    view: ResultView,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Session {
    /// Fresh session with default boxes and every letter neutral
    #[must_use]
    pub fn new(highlight_length: Option<usize>) -> Self {
        Self {
            boxes: PositionBoxes::default(),
            classifier: LetterClassifier::new(),
            length: LengthFilter::NONE,
            length_input: String::new(),
            highlight_length,
            corpus_total: 0,
            tracker: RequestTracker::default(),
            view: ResultView::not_searched(),
        }
    }

    #[must_use]
    pub const fn boxes(&self) -> &PositionBoxes {
        &self.boxes
    }

    #[must_use]
    pub const fn classifier(&self) -> &LetterClassifier {
        &self.classifier
    }

    /// Classification of a letter, with inline already reconciled
    #[must_use]
    pub const fn classification(&self, letter: Letter) -> Classification {
        self.classifier.classification(letter)
    }

    /// Length field text as it should be displayed
    #[must_use]
    pub fn length_input(&self) -> &str {
        &self.length_input
    }

    #[must_use]
    pub const fn length_filter(&self) -> LengthFilter {
        self.length
    }

    #[must_use]
    pub const fn view(&self) -> &ResultView {
        &self.view
    }

    #[must_use]
    pub const fn corpus_total(&self) -> usize {
        self.corpus_total
    }

    pub const fn set_corpus_total(&mut self, total: usize) {
        self.corpus_total = total;
    }

    /// True while a search has been issued but not yet applied
    #[must_use]
    pub const fn is_searching(&self) -> bool {
        self.tracker.is_pending()
    }

    // --- box edits -------------------------------------------------------

    /// Type a letter into the focused box; non-letters are ignored
    ///
    /// Returns true if the boxes changed.
    pub fn type_letter(&mut self, ch: char) -> bool {
        let Ok(letter) = Letter::from_char(ch) else {
            return false;
        };
        self.boxes.type_letter(letter);
        self.reconcile();
        true
    }

    /// Set (`Some`) or clear (`None`) a specific box
    ///
    /// Non-letter characters clear the box. Returns true if the boxes changed.
    pub fn set_box(&mut self, index: usize, ch: Option<char>) -> bool {
        let value = ch.and_then(|c| Letter::from_char(c).ok());
        let changed = self.boxes.set(index, value);
        if changed {
            self.reconcile();
        }
        changed
    }

    /// Clear the focused box, or step focus back if it is empty
    ///
    /// Returns true if a letter was removed.
    pub fn backspace(&mut self) -> bool {
        let removed = self.boxes.backspace();
        if removed {
            self.reconcile();
        }
        removed
    }

    pub fn move_focus(&mut self, delta: isize) {
        self.boxes.move_focus(delta);
    }

    pub fn focus(&mut self, index: usize) {
        self.boxes.set_focus(index);
    }

    /// Replace the boxes with a pattern, and the length filter with its length
    pub fn load_pattern(&mut self, pattern: &Pattern) {
        self.boxes.load(pattern);
        self.length = LengthFilter::from_value(self.boxes.len());
        self.length_input = self.boxes.len().to_string();
        self.reconcile();
    }

    // --- keyboard ----------------------------------------------------------

    /// Cycle a keyboard letter; inline letters and non-letters are ignored
    ///
    /// Returns the letter's classification afterwards.
    pub fn cycle_key(&mut self, ch: char) -> Option<Classification> {
        let letter = Letter::from_char(ch).ok()?;
        Some(self.classifier.cycle(letter))
    }

    // --- length filter ------------------------------------------------------

    /// Apply new length field text and rebuild the boxes
    ///
    /// Input above the cap is clamped (and the field shows the clamped value)
    /// before the boxes are rebuilt; unusable input falls back to the default
    /// box count with no length filter.
    pub fn set_length_input(&mut self, text: &str) {
        self.length = LengthFilter::parse(text);
        self.length_input = match self.length.value() {
            Some(value) if self.length.was_clamped() => value.to_string(),
            _ => text.to_string(),
        };
        self.boxes
            .rebuild(self.length.value().unwrap_or(DEFAULT_BOX_COUNT));
        self.reconcile();
    }

    /// Empty the boxes, reset every key and forget the last results
    ///
    /// The length field keeps its value.
    pub fn clear(&mut self) {
        self.boxes.clear();
        self.classifier.reset();
        self.view = ResultView::not_searched();
        // Nothing in flight may repaint the cleared view
        let seq = self.tracker.issue();
        self.tracker.mark_applied(seq);
    }

    fn reconcile(&mut self) {
        self.classifier.reconcile_inline(self.boxes.active_letters());
    }

    // --- searching -------------------------------------------------------

    /// The query for the current state
    #[must_use]
    pub fn query(&self) -> ConstraintQuery {
        compile(
            self.boxes.pattern(),
            self.length,
            self.classifier.allowed(),
            self.classifier.disallowed(),
        )
    }

    /// Issue a numbered request for the current state
    ///
    /// Any reply to an earlier request is stale from now on.
    pub fn next_request(&mut self) -> SearchRequest {
        let seq = self.tracker.issue();
        log::debug!("search #{seq} issued");
        SearchRequest {
            seq,
            query: self.query(),
        }
    }

    /// Apply a reply if it answers the latest request
    ///
    /// Returns false (and changes nothing) for stale replies.
    pub fn apply(&mut self, reply: SearchReply) -> bool {
        if !self.tracker.is_latest(reply.seq) {
            log::debug!("discarding stale reply #{}", reply.seq);
            return false;
        }
        self.view = present(&reply.outcome, self.highlight_length);
        self.tracker.mark_applied(reply.seq);
        true
    }
}
