//! Shared value types for the validation core.
//!
//! These are transient values: nothing here is persisted, cached, or mutated
//! after construction.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::date::is_date_end_great_or_equal_date_initial;

/// Where a calendar day sits relative to a reference day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelativeDay {
    /// Two or more days before the reference day.
    Past,
    Yesterday,
    Today,
    Tomorrow,
    /// Two or more days after the reference day.
    Future,
}

impl RelativeDay {
    pub fn as_str(self) -> &'static str {
        match self {
            RelativeDay::Past => "past",
            RelativeDay::Yesterday => "yesterday",
            RelativeDay::Today => "today",
            RelativeDay::Tomorrow => "tomorrow",
            RelativeDay::Future => "future",
        }
    }
}

impl fmt::Display for RelativeDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An `(initial, end)` pair of dates.
///
/// Construction never checks ordering: a reversed interval is a legal value
/// and callers ask [`is_valid`](Self::is_valid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateInterval<D> {
    pub initial: D,
    pub end: D,
}

impl<D> DateInterval<D> {
    pub fn new(initial: D, end: D) -> Self {
        Self { initial, end }
    }
}

impl<D: PartialOrd> DateInterval<D> {
    /// True if `end >= initial`, compared as instants (no day truncation).
    pub fn is_valid(&self) -> bool {
        is_date_end_great_or_equal_date_initial(Some(&self.initial), Some(&self.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn reversed_interval_is_constructible_but_invalid() {
        let interval = DateInterval::new(day(2007, 2, 3), day(2007, 2, 2));
        assert!(!interval.is_valid());
    }

    #[test]
    fn single_day_interval_is_valid() {
        let interval = DateInterval::new(day(2007, 2, 2), day(2007, 2, 2));
        assert!(interval.is_valid());
    }

    #[test]
    fn relative_day_serializes_lowercase() {
        let json = serde_json::to_string(&RelativeDay::Yesterday).expect("serialize");
        assert_eq!(json, "\"yesterday\"");
        assert_eq!(RelativeDay::Future.to_string(), "future");
    }
}
