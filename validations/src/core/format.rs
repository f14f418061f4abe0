//! Date parsing behind a small capability trait.
//!
//! The date predicates only need "parse this text into a date or fail"; they
//! never look at pattern syntax. [`DateFormat`] is the chrono-backed
//! implementation used by the CLI and config.

use std::fmt;

use chrono::format::{Item, Parsed, StrftimeItems, parse};
use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::core::error::{ValidationError, ValidationResult};

/// Day/month/year with `/` separators, e.g. `02/02/2007`.
pub const DEFAULT_PATTERN: &str = "%d/%m/%Y";

/// Parses text into a date value.
pub trait DateParser {
    /// Parse `text` as a whole; trailing or missing input is an error.
    fn parse(&self, text: &str) -> ValidationResult<NaiveDateTime>;

    /// Pattern description used in diagnostics.
    fn pattern(&self) -> &str;
}

/// Immutable strftime-style pattern (chrono syntax).
///
/// Parsing is strict: separators must match, the whole input must be
/// consumed, and out-of-range fields (`32/01/2007`) fail instead of rolling
/// over. Patterns without time fields parse to midnight; an hour without
/// minutes is the hour on the dot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateFormat {
    pattern: String,
}

impl DateFormat {
    /// Build a format, rejecting patterns chrono cannot interpret.
    pub fn new(pattern: impl Into<String>) -> ValidationResult<Self> {
        let pattern = pattern.into();
        if pattern.trim().is_empty() {
            return Err(ValidationError::invalid_format(&pattern, "pattern is empty"));
        }
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(ValidationError::invalid_format(
                &pattern,
                "unsupported format specifier",
            ));
        }
        Ok(Self { pattern })
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

impl TryFrom<String> for DateFormat {
    type Error = ValidationError;

    fn try_from(pattern: String) -> ValidationResult<Self> {
        Self::new(pattern)
    }
}

impl From<DateFormat> for String {
    fn from(format: DateFormat) -> Self {
        format.pattern
    }
}

impl DateParser for DateFormat {
    fn parse(&self, text: &str) -> ValidationResult<NaiveDateTime> {
        let mut parsed = Parsed::new();
        parse(&mut parsed, text, StrftimeItems::new(&self.pattern))
            .map_err(|err| ValidationError::parse(text, &self.pattern, err))?;
        let date = parsed
            .to_naive_date()
            .map_err(|err| ValidationError::parse(text, &self.pattern, err))?;
        let time = if has_time_fields(&parsed) {
            // `%d/%m/%Y %H` is the hour on the dot.
            if parsed.minute.is_none() {
                parsed
                    .set_minute(0)
                    .map_err(|err| ValidationError::parse(text, &self.pattern, err))?;
            }
            // A 12-hour field without `%p` stays ambiguous and fails here.
            parsed
                .to_naive_time()
                .map_err(|err| ValidationError::parse(text, &self.pattern, err))?
        } else {
            NaiveTime::MIN
        };
        Ok(date.and_time(time))
    }

    fn pattern(&self) -> &str {
        &self.pattern
    }
}

/// True if any time-of-day field was parsed.
fn has_time_fields(parsed: &Parsed) -> bool {
    parsed.hour_div_12.is_some()
        || parsed.hour_mod_12.is_some()
        || parsed.minute.is_some()
        || parsed.second.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .expect("valid date")
            .and_time(NaiveTime::MIN)
    }

    #[test]
    fn default_is_day_month_year() {
        let format = DateFormat::default();
        assert_eq!(format.as_str(), "%d/%m/%Y");
        assert_eq!(format.parse("02/02/2007"), Ok(ymd(2007, 2, 2)));
    }

    #[test]
    fn parse_requires_matching_separators() {
        let format = DateFormat::default();
        let err = format.parse("02-02-2007").expect_err("dashes do not match");
        assert!(err.is_parse());
    }

    #[test]
    fn parse_rejects_trailing_input() {
        let format = DateFormat::default();
        assert!(format.parse("02/02/2007 extra").is_err());
        assert!(format.parse("02/02/2007x").is_err());
    }

    #[test]
    fn parse_rejects_partial_input() {
        let format = DateFormat::default();
        assert!(format.parse("02/02").is_err());
        assert!(format.parse("").is_err());
    }

    #[test]
    fn parse_rejects_out_of_range_fields() {
        let format = DateFormat::default();
        assert!(format.parse("32/01/2007").is_err());
        assert!(format.parse("29/02/2007").is_err());
        assert_eq!(format.parse("29/02/2008"), Ok(ymd(2008, 2, 29)));
    }

    #[test]
    fn parse_keeps_time_fields_when_pattern_has_them() {
        let format = DateFormat::new("%Y-%m-%d %H:%M").expect("valid pattern");
        let parsed = format.parse("2007-02-02 13:45").expect("parse");
        let expected = NaiveDate::from_ymd_opt(2007, 2, 2)
            .expect("valid date")
            .and_hms_opt(13, 45, 0)
            .expect("valid time");
        assert_eq!(parsed, expected);
    }

    #[test]
    fn parse_hour_only_pattern_keeps_the_hour() {
        let format = DateFormat::new("%d/%m/%Y %H").expect("valid pattern");
        let expected = NaiveDate::from_ymd_opt(2007, 2, 2)
            .expect("valid date")
            .and_hms_opt(15, 0, 0)
            .expect("valid time");
        assert_eq!(format.parse("02/02/2007 15"), Ok(expected));
    }

    #[test]
    fn parse_twelve_hour_clock() {
        let format = DateFormat::new("%d/%m/%Y %I:%M %p").expect("valid pattern");
        let expected = NaiveDate::from_ymd_opt(2007, 2, 2)
            .expect("valid date")
            .and_hms_opt(15, 30, 0)
            .expect("valid time");
        assert_eq!(format.parse("02/02/2007 03:30 PM"), Ok(expected));
    }

    #[test]
    fn parse_rejects_twelve_hour_clock_without_meridiem() {
        let format = DateFormat::new("%d/%m/%Y %I:%M").expect("valid pattern");
        let err = format.parse("02/02/2007 03:30").expect_err("am or pm unknown");
        assert!(err.is_parse());
    }

    #[test]
    fn new_rejects_unknown_specifier() {
        let err = DateFormat::new("%d/%Q/%Y").expect_err("unknown specifier");
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
        assert!(DateFormat::new("  ").is_err());
    }

    #[test]
    fn serde_round_trips_through_pattern_string() {
        let format: DateFormat = serde_json::from_str("\"%Y-%m-%d\"").expect("deserialize");
        assert_eq!(format.as_str(), "%Y-%m-%d");
        assert!(serde_json::from_str::<DateFormat>("\"%Q\"").is_err());
    }

    #[test]
    fn shared_across_threads() {
        let format = DateFormat::default();
        std::thread::scope(|scope| {
            for day in 1..=8u32 {
                let format = &format;
                scope.spawn(move || {
                    let text = format!("{day:02}/03/2010");
                    assert_eq!(format.parse(&text), Ok(ymd(2010, 3, day)));
                });
            }
        });
    }
}
