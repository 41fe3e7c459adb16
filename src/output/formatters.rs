//! Formatting utilities for terminal output

use crate::core::{Classification, LetterClassifier, PositionBoxes, WILDCARD};

/// On-screen keyboard layout
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Format a count with thousands separators: 12345 → "12,345"
#[must_use]
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }

    result
}

/// Boxes as text, focused box in angle brackets: `[A]<_>[_]`
#[must_use]
pub fn boxes_line(boxes: &PositionBoxes) -> String {
    boxes
        .slots()
        .iter()
        .enumerate()
        .map(|(i, slot)| {
            let ch = slot.map_or('_', |letter| letter.to_char().to_ascii_uppercase());
            if i == boxes.focus() {
                format!("<{ch}>")
            } else {
                format!("[{ch}]")
            }
        })
        .collect()
}

/// Pattern text with wildcards spelled out for humans
#[must_use]
pub fn pattern_text(boxes: &PositionBoxes) -> String {
    boxes
        .pattern()
        .map_or_else(|| WILDCARD.to_string(), |p| p.to_string())
}

/// Single-character marker for a classification
#[must_use]
pub const fn classification_marker(state: Classification) -> char {
    match state {
        Classification::Neutral => ' ',
        Classification::Allowed => '+',
        Classification::Disallowed => '-',
        Classification::Inline => '*',
    }
}

/// Summary like `"allowed: e, r  disallowed: a  inline: q"`
#[must_use]
pub fn classifier_summary(classifier: &LetterClassifier) -> String {
    let list = |state| {
        let chars = classifier.with_state(state).to_chars();
        if chars.is_empty() {
            "-".to_string()
        } else {
            chars
                .iter()
                .map(char::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        }
    };

    format!(
        "allowed: {}  disallowed: {}  inline: {}",
        list(Classification::Allowed),
        list(Classification::Disallowed),
        list(Classification::Inline)
    )
}
