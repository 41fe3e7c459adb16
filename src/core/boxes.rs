//! Per-position letter boxes
//!
//! The boxes are the editable form of a [`Pattern`]: an ordered row of slots
//! with a focus cursor. Filling a slot moves focus forward, backspace on an
//! empty slot moves it back. Every edit can change which letters are placed,
//! so callers read [`PositionBoxes::active_letters`] afterwards to reconcile
//! the classifier.

use super::{Letter, LetterSet, MAX_PATTERN_LENGTH, Pattern};

/// Box count used when no usable length has been entered
pub const DEFAULT_BOX_COUNT: usize = 5;

/// Ordered row of 1..=15 letter slots plus a focus index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionBoxes {
    slots: Vec<Option<Letter>>,
    focus: usize,
}

impl Default for PositionBoxes {
    fn default() -> Self {
        Self::new(DEFAULT_BOX_COUNT)
    }
}

impl PositionBoxes {
    /// Empty boxes, count clamped to `1..=MAX_PATTERN_LENGTH`
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            slots: vec![None; count.clamp(1, MAX_PATTERN_LENGTH)],
            focus: 0,
        }
    }

    /// Replace the row with `count` empty boxes
    ///
    /// Old contents are not carried over, even when the count is unchanged.
    pub fn rebuild(&mut self, count: usize) {
        *self = Self::new(count);
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false; there is at least one box
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn focus(&self) -> usize {
        self.focus
    }

    #[must_use]
    pub fn slots(&self) -> &[Option<Letter>] {
        &self.slots
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Letter> {
        self.slots.get(index).copied().flatten()
    }

    /// Move focus to a box, clamped to the row
    pub fn set_focus(&mut self, index: usize) {
        self.focus = index.min(self.slots.len() - 1);
    }

    /// Move focus left (negative) or right (positive), stopping at the ends
    pub fn move_focus(&mut self, delta: isize) {
        let target = self.focus.saturating_add_signed(delta);
        self.set_focus(target);
    }

    /// Set or clear one box without moving focus
    ///
    /// Out-of-range indices are ignored. Returns true if the content changed.
    pub fn set(&mut self, index: usize, value: Option<Letter>) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) if *slot != value => {
                *slot = value;
                true
            }
            _ => false,
        }
    }

    /// Fill the focused box and advance focus if there is a next box
    pub fn type_letter(&mut self, letter: Letter) {
        self.slots[self.focus] = Some(letter);
        if self.focus + 1 < self.slots.len() {
            self.focus += 1;
        }
    }

    /// Clear the focused box, or step back if it is already empty
    ///
    /// Returns true if a letter was removed.
    pub fn backspace(&mut self) -> bool {
        if self.slots[self.focus].take().is_some() {
            return true;
        }
        if self.focus > 0 {
            self.focus -= 1;
        }
        false
    }

    /// Empty every box and return focus to the start
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.focus = 0;
    }

    /// Load a pattern into the boxes, resizing the row to its length
    pub fn load(&mut self, pattern: &Pattern) {
        self.rebuild(pattern.len());
        for (slot, value) in self.slots.iter_mut().zip(pattern.slots()) {
            *slot = *value;
        }
    }

    /// Letters placed in at least one box
    #[must_use]
    pub fn active_letters(&self) -> LetterSet {
        self.slots.iter().flatten().copied().collect()
    }

    /// Pattern formed by the boxes
    #[must_use]
    pub fn pattern(&self) -> Option<Pattern> {
        Pattern::from_slots(&self.slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::from_char(ch).unwrap()
    }

    #[test]
    fn count_is_clamped() {
        assert_eq!(PositionBoxes::new(0).len(), 1);
        assert_eq!(PositionBoxes::new(20).len(), MAX_PATTERN_LENGTH);
        assert_eq!(PositionBoxes::default().len(), DEFAULT_BOX_COUNT);
    }

    #[test]
    fn typing_advances_focus_and_stops_at_end() {
        let mut boxes = PositionBoxes::new(3);
        for ch in ['c', 'a', 't', 's'] {
            boxes.type_letter(letter(ch));
        }
        assert_eq!(boxes.focus(), 2);
        assert_eq!(boxes.pattern().unwrap().to_string(), "cas");
    }

    #[test]
    fn backspace_clears_then_steps_back() {
        let mut boxes = PositionBoxes::new(5);
        boxes.type_letter(letter('a'));
        boxes.type_letter(letter('b'));
        assert_eq!(boxes.focus(), 2);

        // Focused box is empty: only focus moves
        assert!(!boxes.backspace());
        assert_eq!(boxes.focus(), 1);
        assert_eq!(boxes.get(1), Some(letter('b')));

        // Now the focused box holds 'b'
        assert!(boxes.backspace());
        assert_eq!(boxes.get(1), None);
        assert_eq!(boxes.focus(), 1);
    }

    #[test]
    fn backspace_at_start_stays() {
        let mut boxes = PositionBoxes::new(2);
        assert!(!boxes.backspace());
        assert_eq!(boxes.focus(), 0);
    }

    #[test]
    fn rebuild_discards_contents() {
        let mut boxes = PositionBoxes::new(5);
        boxes.type_letter(letter('q'));
        boxes.rebuild(5);
        assert!(boxes.active_letters().is_empty());
        assert_eq!(boxes.focus(), 0);
    }

    #[test]
    fn set_ignores_out_of_range() {
        let mut boxes = PositionBoxes::new(2);
        assert!(!boxes.set(7, Some(letter('x'))));
        assert!(boxes.set(1, Some(letter('x'))));
        assert!(!boxes.set(1, Some(letter('x'))));
        assert_eq!(boxes.pattern().unwrap().to_string(), ".x");
    }

    #[test]
    fn move_focus_clamps() {
        let mut boxes = PositionBoxes::new(4);
        boxes.move_focus(-3);
        assert_eq!(boxes.focus(), 0);
        boxes.move_focus(10);
        assert_eq!(boxes.focus(), 3);
    }

    #[test]
    fn active_letters_tracks_duplicates_once() {
        let mut boxes = PositionBoxes::new(5);
        boxes.set(0, Some(letter('e')));
        boxes.set(4, Some(letter('e')));
        assert_eq!(boxes.active_letters().to_string(), "e");

        boxes.set(0, None);
        assert_eq!(boxes.active_letters().to_string(), "e");
        boxes.set(4, None);
        assert!(boxes.active_letters().is_empty());
    }

    #[test]
    fn load_resizes_to_pattern() {
        let mut boxes = PositionBoxes::default();
        boxes.load(&"m.l.e.".parse().unwrap());
        assert_eq!(boxes.len(), 6);
        assert_eq!(boxes.pattern().unwrap().to_string(), "m.l.e.");
    }
}
