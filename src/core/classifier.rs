//! Letter classification state machine
//!
//! Every letter is in exactly one [`Classification`]. Manual cycling moves a
//! letter through neutral → allowed → disallowed → neutral; letters that sit
//! in a pattern box are forced to [`Classification::Inline`] and cannot be
//! cycled until they leave every box.

use super::{Letter, LetterSet};

/// How a letter constrains the search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Classification {
    /// No constraint
    #[default]
    Neutral,
    /// Must occur somewhere in the word
    Allowed,
    /// Must not occur anywhere in the word
    Disallowed,
    /// Placed literally in a pattern box
    Inline,
}

impl Classification {
    /// Next state in the manual cycle; `Inline` never cycles
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Neutral => Self::Allowed,
            Self::Allowed => Self::Disallowed,
            Self::Disallowed => Self::Neutral,
            Self::Inline => Self::Inline,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Allowed => "allowed",
            Self::Disallowed => "disallowed",
            Self::Inline => "inline",
        }
    }
}

/// Owned classification table for all 26 letters
///
/// All mutation goes through [`cycle`](Self::cycle),
/// [`reconcile_inline`](Self::reconcile_inline) and [`reset`](Self::reset).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterClassifier {
    states: [Classification; Letter::COUNT],
}

impl LetterClassifier {
    /// All letters neutral
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current classification of a letter
    #[inline]
    #[must_use]
    pub const fn classification(&self, letter: Letter) -> Classification {
        self.states[letter.index()]
    }

    /// Advance a letter through neutral → allowed → disallowed → neutral
    ///
    /// Inline letters are left untouched. Returns the resulting classification.
    ///
    /// # Examples
    /// ```
    /// use wordfinder::core::{Classification, Letter, LetterClassifier, LetterSet};
    ///
    /// let e = Letter::from_char('e').unwrap();
    /// let mut classifier = LetterClassifier::new();
    /// assert_eq!(classifier.cycle(e), Classification::Allowed);
    ///
    /// classifier.reconcile_inline(LetterSet::EMPTY.with(e));
    /// assert_eq!(classifier.cycle(e), Classification::Inline);
    /// ```
    pub fn cycle(&mut self, letter: Letter) -> Classification {
        let state = &mut self.states[letter.index()];
        *state = state.next();
        *state
    }

    /// Force letters in `active` to inline and release letters that left the boxes
    ///
    /// Manual state is discarded once a letter becomes inline: a released
    /// letter goes back to neutral, not to whatever it was before.
    /// Returns true if any classification changed.
    pub fn reconcile_inline(&mut self, active: LetterSet) -> bool {
        let mut changed = false;
        for letter in Letter::all() {
            let state = &mut self.states[letter.index()];
            let target = if active.contains(letter) {
                Classification::Inline
            } else if *state == Classification::Inline {
                Classification::Neutral
            } else {
                continue;
            };
            if *state != target {
                log::debug!("letter '{letter}': {} -> {}", state.label(), target.label());
                *state = target;
                changed = true;
            }
        }
        changed
    }

    /// Return every letter to neutral
    pub fn reset(&mut self) {
        self.states = [Classification::Neutral; Letter::COUNT];
    }

    /// Letters currently in a given state
    #[must_use]
    pub fn with_state(&self, state: Classification) -> LetterSet {
        Letter::all()
            .filter(|&letter| self.classification(letter) == state)
            .collect()
    }

    /// Letters that must occur in a match
    #[must_use]
    pub fn allowed(&self) -> LetterSet {
        self.with_state(Classification::Allowed)
    }

    /// Letters that must not occur in a match
    #[must_use]
    pub fn disallowed(&self) -> LetterSet {
        self.with_state(Classification::Disallowed)
    }

    /// Letters currently placed in a box
    #[must_use]
    pub fn inline(&self) -> LetterSet {
        self.with_state(Classification::Inline)
    }
}
