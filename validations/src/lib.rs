//! Null-tolerant string and calendar-day predicates for record validation.
//!
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic predicates. String shape checks live in
//!   [`core::text`]; calendar-day ordering, relative-day classification and
//!   date-text checks live in [`core::date`], parsing through the
//!   [`core::format::DateParser`] capability.
//! - **[`io`]**: Side-effecting helpers (config file) for the binary.
//!
//! [`check`] coordinates both for the `validations` command.

pub mod check;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use crate::core::date::{
    DateLike, calendar_day, classify_day, day_offset, is_date_end_great_date_initial,
    is_date_end_great_or_equal_date_initial, is_date_end_less_than_date_initial,
    is_date_initial_equal_date_end, is_days_past, is_future_day, is_interval_date_valid,
    is_past_day, is_today, is_tomorrow, is_valid_date, is_yesterday, normalize_day,
    relative_calendar, relative_date, relative_day, today,
};
pub use crate::core::error::{ValidationError, ValidationResult};
pub use crate::core::format::{DateFormat, DateParser};
pub use crate::core::text::{
    CharClass, equals, has_bounded_length, has_maximum_length, has_minimum_length,
    is_alphanumeric_space, is_blank, is_empty, is_letters_numbers, is_letters_space,
    is_not_blank, is_not_empty, is_numeric, is_numeric_space, is_only_letters,
};
pub use crate::core::types::{DateInterval, RelativeDay};
