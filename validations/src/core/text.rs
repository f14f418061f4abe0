//! Null-tolerant string predicates.
//!
//! Text values are `Option<&str>`; `None` is the absent value. The truth
//! table for absent input is not uniform:
//!
//! - emptiness/blankness: absent counts as empty and blank.
//! - character classes: absent is never classifiable (`false`), while `""`
//!   vacuously matches every class.
//! - length: absent has effective length 0.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::error::{ValidationError, ValidationResult};

static LETTERS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\p{L}*$").unwrap());
static LETTERS_SPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\p{L} ]*$").unwrap());
static LETTERS_NUMBERS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\p{Nd}]*$").unwrap());
static ALPHANUMERIC_SPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\p{Nd} ]*$").unwrap());
static NUMERIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\p{Nd}*$").unwrap());
static NUMERIC_SPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\p{Nd} ]*$").unwrap());

/// Permitted character sets for the class predicates.
///
/// Letters are Unicode general category `L`, digits are `Nd`. Space means
/// U+0020 only; tabs and newlines never match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CharClass {
    /// {letters}
    #[serde(rename = "only-letters")]
    Letters,
    /// {letters, space}
    LettersSpace,
    /// {letters, digits}
    LettersNumbers,
    /// {letters, digits, space}
    AlphanumericSpace,
    /// {digits}
    Numeric,
    /// {digits, space}
    NumericSpace,
}

impl CharClass {
    pub const ALL: [CharClass; 6] = [
        CharClass::Letters,
        CharClass::LettersSpace,
        CharClass::LettersNumbers,
        CharClass::AlphanumericSpace,
        CharClass::Numeric,
        CharClass::NumericSpace,
    ];

    /// Stable kebab-case name, shared with config and CLI.
    pub fn name(self) -> &'static str {
        match self {
            CharClass::Letters => "only-letters",
            CharClass::LettersSpace => "letters-space",
            CharClass::LettersNumbers => "letters-numbers",
            CharClass::AlphanumericSpace => "alphanumeric-space",
            CharClass::Numeric => "numeric",
            CharClass::NumericSpace => "numeric-space",
        }
    }

    /// Look up a class by its [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<CharClass> {
        Self::ALL.into_iter().find(|class| class.name() == name)
    }

    /// True if every character of `value` belongs to this class.
    ///
    /// Absent is `false`; the empty string is `true`.
    pub fn matches(self, value: Option<&str>) -> bool {
        match value {
            Some(text) => self.pattern().is_match(text),
            None => false,
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            CharClass::Letters => &LETTERS_RE,
            CharClass::LettersSpace => &LETTERS_SPACE_RE,
            CharClass::LettersNumbers => &LETTERS_NUMBERS_RE,
            CharClass::AlphanumericSpace => &ALPHANUMERIC_SPACE_RE,
            CharClass::Numeric => &NUMERIC_RE,
            CharClass::NumericSpace => &NUMERIC_SPACE_RE,
        }
    }
}

/// Null-safe equality: both absent, or both present and equal.
///
/// ```
/// use validations::core::text::equals;
///
/// assert!(equals::<str>(None, None));
/// assert!(equals(Some("Hi"), Some("Hi")));
/// assert!(!equals(Some("Hi"), None));
/// assert!(!equals(Some("Hi"), Some("Ho")));
/// ```
pub fn equals<T: PartialEq + ?Sized>(left: Option<&T>, right: Option<&T>) -> bool {
    match (left, right) {
        (Some(left), Some(right)) => left == right,
        (None, None) => true,
        _ => false,
    }
}

/// True if `value` is absent or has zero characters.
pub fn is_empty(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}

pub fn is_not_empty(value: Option<&str>) -> bool {
    !is_empty(value)
}

/// True if `value` is absent, empty, or whitespace only.
///
/// Whitespace here is the Unicode `White_Space` property, which is wider than
/// the single space accepted by the `*_space` class predicates.
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|text| text.chars().all(char::is_whitespace))
}

pub fn is_not_blank(value: Option<&str>) -> bool {
    !is_blank(value)
}

/// Length after trimming surrounding whitespace; absent counts as 0.
///
/// Interior whitespace counts. Length is in Unicode scalar values.
pub fn effective_length(value: Option<&str>) -> usize {
    value.map_or(0, |text| text.trim().chars().count())
}

/// True if the effective length is at least `min`.
pub fn has_minimum_length(value: Option<&str>, min: usize) -> bool {
    min <= effective_length(value)
}

/// True if the effective length is at most `max`.
pub fn has_maximum_length(value: Option<&str>, max: usize) -> bool {
    effective_length(value) <= max
}

/// True if the effective length lies in `[min, max]`.
///
/// # Errors
/// Returns [`ValidationError::InvalidArgument`] when `min > max`, whatever
/// `value` is.
pub fn has_bounded_length(value: Option<&str>, min: usize, max: usize) -> ValidationResult<bool> {
    if min > max {
        debug!(min, max, "rejected inverted length bounds");
        return Err(ValidationError::invalid_argument(format!(
            "minimum length {min} must be less than or equal to maximum length {max}"
        )));
    }
    let length = effective_length(value);
    Ok(min <= length && length <= max)
}

pub fn is_only_letters(value: Option<&str>) -> bool {
    CharClass::Letters.matches(value)
}

pub fn is_letters_space(value: Option<&str>) -> bool {
    CharClass::LettersSpace.matches(value)
}

pub fn is_letters_numbers(value: Option<&str>) -> bool {
    CharClass::LettersNumbers.matches(value)
}

pub fn is_alphanumeric_space(value: Option<&str>) -> bool {
    CharClass::AlphanumericSpace.matches(value)
}

/// Digits only. A decimal point or sign is not a digit.
pub fn is_numeric(value: Option<&str>) -> bool {
    CharClass::Numeric.matches(value)
}

pub fn is_numeric_space(value: Option<&str>) -> bool {
    CharClass::NumericSpace.matches(value)
}
