//! Orchestration for `validations` commands.
//!
//! Turns command-line input into core predicate calls and structured
//! outcomes. Printing and exit codes stay in `main`.

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use tracing::debug;

use crate::core::date::{self, day_offset};
use crate::core::error::{ValidationError, ValidationResult};
use crate::core::format::{DateFormat, DateParser};
use crate::core::text::{self, CharClass};
use crate::core::types::RelativeDay;
use crate::exit_codes;
use crate::io::config::ValidationsConfig;

/// Boolean result of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    Pass,
    Fail,
}

impl CheckOutcome {
    pub fn exit_code(self) -> i32 {
        match self {
            CheckOutcome::Pass => exit_codes::PASS,
            CheckOutcome::Fail => exit_codes::FAIL,
        }
    }
}

impl From<bool> for CheckOutcome {
    fn from(passed: bool) -> Self {
        if passed {
            CheckOutcome::Pass
        } else {
            CheckOutcome::Fail
        }
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckOutcome::Pass => f.write_str("pass"),
            CheckOutcome::Fail => f.write_str("fail"),
        }
    }
}

/// Named text predicate accepted by `validations text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextCheck {
    Empty,
    NotEmpty,
    Blank,
    NotBlank,
    Class(CharClass),
}

impl TextCheck {
    pub fn evaluate(self, value: Option<&str>) -> bool {
        match self {
            TextCheck::Empty => text::is_empty(value),
            TextCheck::NotEmpty => text::is_not_empty(value),
            TextCheck::Blank => text::is_blank(value),
            TextCheck::NotBlank => text::is_not_blank(value),
            TextCheck::Class(class) => class.matches(value),
        }
    }
}

impl FromStr for TextCheck {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "empty" => Ok(TextCheck::Empty),
            "not-empty" => Ok(TextCheck::NotEmpty),
            "blank" => Ok(TextCheck::Blank),
            "not-blank" => Ok(TextCheck::NotBlank),
            other => CharClass::from_name(other).map(TextCheck::Class).ok_or_else(|| {
                let classes: Vec<&str> = CharClass::ALL.iter().map(|class| class.name()).collect();
                format!(
                    "unknown check '{other}'; expected empty|not-empty|blank|not-blank|{}",
                    classes.join("|")
                )
            }),
        }
    }
}

/// Every character class `value` belongs to, in declaration order.
pub fn matching_classes(value: Option<&str>) -> Vec<CharClass> {
    CharClass::ALL
        .into_iter()
        .filter(|class| class.matches(value))
        .collect()
}

/// Length bounds for `validations length`; either side may be open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LengthBounds {
    pub min: Option<usize>,
    pub max: Option<usize>,
}

impl LengthBounds {
    /// Command-line bounds first, config bounds for whatever is missing.
    pub fn resolve(min: Option<usize>, max: Option<usize>, config: &ValidationsConfig) -> Self {
        Self {
            min: min.or(config.length.min),
            max: max.or(config.length.max),
        }
    }
}

/// Apply the bounded, minimum or maximum check depending on which bounds
/// are present.
pub fn check_length(value: Option<&str>, bounds: LengthBounds) -> ValidationResult<bool> {
    match (bounds.min, bounds.max) {
        (Some(min), Some(max)) => text::has_bounded_length(value, min, max),
        (Some(min), None) => Ok(text::has_minimum_length(value, min)),
        (None, Some(max)) => Ok(text::has_maximum_length(value, max)),
        (None, None) => Err(ValidationError::invalid_argument(
            "at least one of --min or --max is required",
        )),
    }
}

/// Pick the date pattern: explicit override, else the configured one.
pub fn resolve_format(pattern: Option<&str>, config: &ValidationsConfig) -> Result<DateFormat> {
    match pattern {
        Some(pattern) => DateFormat::new(pattern).context("parse --format"),
        None => Ok(config.date_format.clone()),
    }
}

/// Pick the reference day: explicit override, pinned config day, or the
/// local clock.
pub fn resolve_today(today: Option<NaiveDate>, config: &ValidationsConfig) -> NaiveDate {
    today.or(config.today).unwrap_or_else(date::today)
}

/// Where a parsed date sits relative to the reference day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayReport {
    pub date: NaiveDateTime,
    pub today: NaiveDate,
    pub relative: RelativeDay,
    pub offset_days: i64,
}

impl fmt::Display for DayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:+}", self.relative, self.offset_days)
    }
}

/// Parse `text` and place it relative to `today`.
pub fn classify_text(
    text: &str,
    parser: &impl DateParser,
    today: NaiveDate,
) -> ValidationResult<DayReport> {
    let parsed = parser.parse(text)?;
    let report = DayReport {
        date: parsed,
        today,
        relative: date::classify_day(&parsed, today),
        offset_days: day_offset(&parsed, today),
    };
    debug!(
        text,
        relative = %report.relative,
        offset = report.offset_days,
        "classified date text"
    );
    Ok(report)
}
