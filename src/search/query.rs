//! Constraint compilation
//!
//! Turns the pieces of session state (pattern, length filter, allowed and
//! disallowed letters) into one immutable [`ConstraintQuery`], and defines the
//! predicate every evaluator must apply.

use crate::core::{LetterSet, MAX_PATTERN_LENGTH, Pattern, Word};
use crate::errors::{PatternError, QueryError};
use serde::{Deserialize, Serialize};

/// Normalized user-entered length filter
///
/// Non-numeric or non-positive input means "no length filter"; values above
/// [`MAX_PATTERN_LENGTH`] are clamped to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LengthFilter {
    value: Option<usize>,
    clamped: bool,
}

impl LengthFilter {
    /// No length constraint
    pub const NONE: Self = Self {
        value: None,
        clamped: false,
    };

    /// Normalize a numeric length
    #[must_use]
    pub const fn from_value(value: usize) -> Self {
        if value == 0 {
            Self::NONE
        } else if value > MAX_PATTERN_LENGTH {
            Self {
                value: Some(MAX_PATTERN_LENGTH),
                clamped: true,
            }
        } else {
            Self {
                value: Some(value),
                clamped: false,
            }
        }
    }

    /// Normalize free-form input text
    ///
    /// Reads the leading decimal digits after trimming, so `"6 letters"` is 6.
    /// Anything without leading digits, or negative, is no filter.
    ///
    /// # Examples
    /// ```
    /// use wordfinder::search::LengthFilter;
    ///
    /// assert_eq!(LengthFilter::parse("7").value(), Some(7));
    /// assert_eq!(LengthFilter::parse("20").value(), Some(15));
    /// assert_eq!(LengthFilter::parse("abc").value(), None);
    /// assert_eq!(LengthFilter::parse("-4").value(), None);
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        let text = text.strip_prefix('+').unwrap_or(text);
        let digits_end = text
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(text.len());
        let digits = &text[..digits_end];

        if digits.is_empty() {
            return Self::NONE;
        }

        // Only overflow can fail here, and an overflowing length is above the cap
        digits
            .parse::<usize>()
            .map_or_else(|_| Self::from_value(usize::MAX), Self::from_value)
    }

    /// The effective length, if any
    #[inline]
    #[must_use]
    pub const fn value(self) -> Option<usize> {
        self.value
    }

    /// True if the input was above the cap and got clamped
    #[inline]
    #[must_use]
    pub const fn was_clamped(self) -> bool {
        self.clamped
    }
}

/// Structured search query derived from session state
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ConstraintQuery {
    /// Positional template; `None` when there are no boxes
    pub pattern: Option<Pattern>,
    /// Explicit length filter, independent of the pattern length
    pub length: Option<usize>,
    /// Letters that must occur somewhere in the word
    pub allowed: LetterSet,
    /// Letters that must not occur anywhere in the word
    pub disallowed: LetterSet,
}

/// Combine pattern, length filter and letter classes into a query
///
/// Pattern length and explicit length are both forwarded untouched; a query
/// where they disagree is valid and simply matches nothing.
///
/// # Panics
/// In debug builds, panics if a letter is both allowed and disallowed. The
/// classifier guarantees this never happens.
///
/// # Examples
/// ```
/// use wordfinder::core::LetterSet;
/// use wordfinder::search::{LengthFilter, compile};
///
/// let query = compile(
///     "a....".parse().ok(),
///     LengthFilter::parse("5"),
///     LetterSet::EMPTY,
///     LetterSet::parse("z").unwrap(),
/// );
/// assert_eq!(query.length, Some(5));
/// ```
#[must_use]
pub fn compile(
    pattern: Option<Pattern>,
    length: LengthFilter,
    allowed: LetterSet,
    disallowed: LetterSet,
) -> ConstraintQuery {
    debug_assert!(
        !allowed.intersects(disallowed),
        "letters '{}' are both allowed and disallowed",
        allowed.intersection(disallowed)
    );

    ConstraintQuery {
        pattern,
        length: length.value(),
        allowed,
        disallowed,
    }
}

impl ConstraintQuery {
    /// The word length a match must have, if the query pins one down
    ///
    /// Prefers the explicit length; falls back to a non-empty pattern's length.
    #[must_use]
    pub fn length_hint(&self) -> Option<usize> {
        self.length.or_else(|| {
            self.pattern
                .as_ref()
                .filter(|p| !p.is_empty())
                .map(Pattern::len)
        })
    }

    /// Decide whether one word satisfies every constraint
    ///
    /// 1. length equals the explicit length filter (if any)
    /// 2. length and literal positions agree with the pattern (if non-empty)
    /// 3. every allowed letter occurs
    /// 4. no disallowed letter occurs
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        if let Some(length) = self.length
            && word.len() != length
        {
            return false;
        }

        if let Some(pattern) = &self.pattern
            && !pattern.matches(word)
        {
            return false;
        }

        let letters = word.letters();
        letters.contains_all(self.allowed) && !letters.intersects(self.disallowed)
    }

    /// Wire shape of this query
    #[must_use]
    pub fn to_request(&self) -> QueryRequest {
        QueryRequest {
            pattern: self.pattern.as_ref().map(ToString::to_string),
            length: self.length,
            allowed: self.allowed.to_chars(),
            disallowed: self.disallowed.to_chars(),
        }
    }
}

/// Transport-agnostic query request
///
/// Letters are lowercase and sorted so identical queries serialize identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub pattern: Option<String>,
    pub length: Option<usize>,
    #[serde(default)]
    pub allowed: Vec<char>,
    #[serde(default)]
    pub disallowed: Vec<char>,
}

impl TryFrom<QueryRequest> for ConstraintQuery {
    type Error = QueryError;

    /// Rebuild a query on the evaluator side of the boundary
    ///
    /// The request is taken literally: `length` is not clamped (only zero
    /// means "any"), and a pattern longer than [`MAX_PATTERN_LENGTH`] is
    /// rejected rather than cut short. Unlike [`compile`], a letter may be in
    /// both lists; the query then matches nothing.
    fn try_from(request: QueryRequest) -> Result<Self, Self::Error> {
        let pattern = match request.pattern.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(text) => {
                let length = text.chars().count();
                if length > MAX_PATTERN_LENGTH {
                    return Err(PatternError::TooLong {
                        length,
                        max: MAX_PATTERN_LENGTH,
                    }
                    .into());
                }
                Some(text.parse::<Pattern>()?)
            }
        };

        let letters = |chars: &[char]| -> Result<LetterSet, QueryError> {
            Ok(LetterSet::parse(&chars.iter().collect::<String>())?)
        };

        Ok(Self {
            pattern,
            length: request.length.filter(|&length| length > 0),
            allowed: letters(&request.allowed)?,
            disallowed: letters(&request.disallowed)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(text: &str) -> LetterSet {
        LetterSet::parse(text).unwrap()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn query(pattern: &str, length: &str, allowed: &str, disallowed: &str) -> ConstraintQuery {
        compile(
            pattern.parse().ok(),
            LengthFilter::parse(length),
            set(allowed),
            set(disallowed),
        )
    }

    #[test]
    fn length_filter_normalization() {
        assert_eq!(LengthFilter::parse("").value(), None);
        assert_eq!(LengthFilter::parse("0").value(), None);
        assert_eq!(LengthFilter::parse(" 6 ").value(), Some(6));
        assert_eq!(LengthFilter::parse("6abc").value(), Some(6));
        assert_eq!(LengthFilter::parse("+3").value(), Some(3));
        assert_eq!(LengthFilter::parse("x6").value(), None);
        assert_eq!(LengthFilter::parse("99999999999999999999999").value(), Some(15));
    }

    #[test]
    fn length_filter_clamps_above_cap() {
        let filter = LengthFilter::parse("20");
        assert_eq!(filter.value(), Some(MAX_PATTERN_LENGTH));
        assert!(filter.was_clamped());
        assert!(!LengthFilter::parse("15").was_clamped());
    }

    #[test]
    fn pattern_and_length_scenario() {
        let q = query("a....", "5", "", "");
        assert!(q.matches(&word("apple")));
        assert!(!q.matches(&word("grape")));
    }

    #[test]
    fn allowed_and_disallowed_scenario() {
        let q = query(".....", "", "e", "a");
        assert!(q.matches(&word("melee")));
        assert!(!q.matches(&word("apple")));
        assert!(!q.matches(&word("grape")));
        assert!(!q.matches(&word("drink"))); // no 'e'
    }

    #[test]
    fn explicit_length_without_pattern() {
        let q = compile(None, LengthFilter::parse("3"), LetterSet::EMPTY, LetterSet::EMPTY);
        assert!(q.matches(&word("cat")));
        assert!(!q.matches(&word("cats")));
    }

    #[test]
    fn mismatched_length_and_pattern_matches_nothing() {
        let q = query("a....", "6", "", "");
        assert!(!q.matches(&word("apple")));
        assert!(!q.matches(&word("abroad")));
        assert_eq!(q.length_hint(), Some(6));
    }

    #[test]
    fn empty_query_matches_everything() {
        let q = ConstraintQuery::default();
        assert!(q.matches(&word("a")));
        assert!(q.matches(&word("characteristically")));
        assert_eq!(q.length_hint(), None);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let q = query("A.P..", "", "L", "Z");
        assert!(q.matches(&word("APPLE")));
    }

    #[test]
    fn compile_is_idempotent() {
        assert_eq!(query("q..e.", "5", "u", "x"), query("q..e.", "5", "u", "x"));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "both allowed and disallowed")]
    fn compile_rejects_overlap_in_debug() {
        let _ = query(".....", "", "ae", "e");
    }

    #[test]
    fn request_is_sorted_and_lowercase() {
        let request = query("A....", "5", "zea", "q").to_request();
        assert_eq!(request.pattern.as_deref(), Some("a...."));
        assert_eq!(request.allowed, vec!['a', 'e', 'z']);
        assert_eq!(request.disallowed, vec!['q']);
    }

    #[test]
    fn request_round_trips_through_json() {
        let original = query("m.l.e", "", "e", "a");
        let json = serde_json::to_string(&original.to_request()).unwrap();
        let request: QueryRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(ConstraintQuery::try_from(request).unwrap(), original);
    }

    #[test]
    fn request_normalizes_missing_fields() {
        let request: QueryRequest =
            serde_json::from_str(r#"{"pattern": "", "length": 0}"#).unwrap();
        let q = ConstraintQuery::try_from(request).unwrap();
        assert_eq!(q, ConstraintQuery::default());
    }

    #[test]
    fn request_rejects_bad_letters() {
        let request = QueryRequest {
            pattern: None,
            length: None,
            allowed: vec!['1'],
            disallowed: Vec::new(),
        };
        assert!(matches!(
            ConstraintQuery::try_from(request),
            Err(QueryError::Letter(_))
        ));
    }

    #[test]
    fn request_length_is_applied_literally() {
        let request = QueryRequest {
            pattern: None,
            length: Some(18),
            allowed: Vec::new(),
            disallowed: Vec::new(),
        };
        let q = ConstraintQuery::try_from(request).unwrap();
        assert_eq!(q.length, Some(18));
        assert!(!q.matches(&word("abcdefghijklmno")));
        assert!(q.matches(&word("abcdefghijklmnopqr")));
    }

    #[test]
    fn request_rejects_overlong_pattern() {
        let request = QueryRequest {
            pattern: Some(".".repeat(MAX_PATTERN_LENGTH + 1)),
            length: None,
            allowed: Vec::new(),
            disallowed: Vec::new(),
        };
        assert_eq!(
            ConstraintQuery::try_from(request),
            Err(QueryError::Pattern(PatternError::TooLong {
                length: MAX_PATTERN_LENGTH + 1,
                max: MAX_PATTERN_LENGTH,
            }))
        );
    }
}
