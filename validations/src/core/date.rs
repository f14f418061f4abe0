//! Calendar-day comparisons, relative-day classification and date parsing
//! checks.
//!
//! Two predicate families live here and they do not agree on equality:
//!
//! - Relative-day predicates (`is_today`, `is_past_day`, ...) truncate the
//!   input to its calendar day first. Bounds are half-open `[lower, upper)`.
//! - Ordering predicates (`is_date_end_great_date_initial`, ...) compare the
//!   raw values, so two instants on the same day but at different times are
//!   not equal.
//!
//! "Today" is always an explicit `NaiveDate` argument. The `*_now` wrappers
//! read the local wall clock through [`today`].

use std::cmp::Ordering;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone};
use tracing::{debug, trace};

use crate::core::format::DateParser;
use crate::core::text::is_blank;
use crate::core::types::{DateInterval, RelativeDay};

/// A value that has a calendar date and a time of day.
pub trait DateLike {
    /// Wall-clock date and time in the value's own calendar.
    fn to_naive(&self) -> NaiveDateTime;
}

impl DateLike for NaiveDateTime {
    fn to_naive(&self) -> NaiveDateTime {
        *self
    }
}

impl DateLike for NaiveDate {
    fn to_naive(&self) -> NaiveDateTime {
        self.and_time(NaiveTime::MIN)
    }
}

impl<Tz: TimeZone> DateLike for DateTime<Tz> {
    fn to_naive(&self) -> NaiveDateTime {
        self.naive_local()
    }
}

/// The local calendar day right now.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Calendar day of `date`, time of day dropped.
pub fn calendar_day(date: &impl DateLike) -> NaiveDate {
    date.to_naive().date()
}

/// `date` with hour, minute and second forced to zero.
pub fn normalize_day(date: &impl DateLike) -> NaiveDateTime {
    calendar_day(date).and_time(NaiveTime::MIN)
}

/// The calendar day `offset_days` away from `from`.
///
/// Saturates at the edges of the supported calendar instead of overflowing.
pub fn relative_day(from: NaiveDate, offset_days: i64) -> NaiveDate {
    TimeDelta::try_days(offset_days)
        .and_then(|delta| from.checked_add_signed(delta))
        .unwrap_or(if offset_days < 0 {
            NaiveDate::MIN
        } else {
            NaiveDate::MAX
        })
}

/// Start of the day `offset_days` away from the calendar day of `from`.
pub fn relative_calendar(from: &impl DateLike, offset_days: i64) -> NaiveDateTime {
    relative_day(calendar_day(from), offset_days).and_time(NaiveTime::MIN)
}

/// Start of the day `offset_days` away from [`today`].
pub fn relative_date(offset_days: i64) -> NaiveDateTime {
    relative_calendar(&today(), offset_days)
}

/// Signed number of calendar days from `today` to the day of `date`.
pub fn day_offset(date: &impl DateLike, today: NaiveDate) -> i64 {
    calendar_day(date).signed_duration_since(today).num_days()
}

/// Half-open `[lower, upper)` test on the day offset from `today`.
///
/// Works on offsets rather than shifted dates, so the bounds stay exact at
/// the edges of the calendar where [`relative_day`] saturates.
fn in_day_range(date: &impl DateLike, today: NaiveDate, lower: i64, upper: i64) -> bool {
    let offset = day_offset(date, today);
    lower <= offset && offset < upper
}

/// Day strictly before `today`.
pub fn is_past_day(date: &impl DateLike, today: NaiveDate) -> bool {
    day_offset(date, today) < 0
}

/// Tomorrow or later.
pub fn is_future_day(date: &impl DateLike, today: NaiveDate) -> bool {
    day_offset(date, today) >= 1
}

pub fn is_today(date: &impl DateLike, today: NaiveDate) -> bool {
    in_day_range(date, today, 0, 1)
}

pub fn is_tomorrow(date: &impl DateLike, today: NaiveDate) -> bool {
    in_day_range(date, today, 1, 2)
}

pub fn is_yesterday(date: &impl DateLike, today: NaiveDate) -> bool {
    in_day_range(date, today, -1, 0)
}

/// Day falls in `[today - days, today)`.
///
/// `days` is not checked for sign: a negative count makes the lower bound
/// later than `today`, so the range is empty and the answer is `false`.
pub fn is_days_past(date: &impl DateLike, days: i64, today: NaiveDate) -> bool {
    in_day_range(date, today, days.saturating_neg(), 0)
}

pub fn is_past_day_now(date: &impl DateLike) -> bool {
    is_past_day(date, today())
}

pub fn is_future_day_now(date: &impl DateLike) -> bool {
    is_future_day(date, today())
}

pub fn is_today_now(date: &impl DateLike) -> bool {
    is_today(date, today())
}

pub fn is_tomorrow_now(date: &impl DateLike) -> bool {
    is_tomorrow(date, today())
}

pub fn is_yesterday_now(date: &impl DateLike) -> bool {
    is_yesterday(date, today())
}

pub fn is_days_past_now(date: &impl DateLike, days: i64) -> bool {
    is_days_past(date, days, today())
}

/// Place `date` relative to `today`.
///
/// `Yesterday` and `Tomorrow` take precedence over `Past` and `Future`.
pub fn classify_day(date: &impl DateLike, today: NaiveDate) -> RelativeDay {
    let relative = if is_today(date, today) {
        RelativeDay::Today
    } else if is_yesterday(date, today) {
        RelativeDay::Yesterday
    } else if is_tomorrow(date, today) {
        RelativeDay::Tomorrow
    } else if is_past_day(date, today) {
        RelativeDay::Past
    } else {
        RelativeDay::Future
    };
    trace!(day = %calendar_day(date), %today, %relative, "classified day");
    relative
}

fn compare_end_to_initial<D: PartialOrd>(initial: Option<D>, end: Option<D>) -> Option<Ordering> {
    let initial = initial?;
    end?.partial_cmp(&initial)
}

/// `end > initial`. Absent on either side is `false`.
pub fn is_date_end_great_date_initial<D: PartialOrd>(initial: Option<D>, end: Option<D>) -> bool {
    compare_end_to_initial(initial, end).is_some_and(Ordering::is_gt)
}

/// `end >= initial`. Absent on either side is `false`.
pub fn is_date_end_great_or_equal_date_initial<D: PartialOrd>(
    initial: Option<D>,
    end: Option<D>,
) -> bool {
    compare_end_to_initial(initial, end).is_some_and(Ordering::is_ge)
}

/// `end < initial`. Absent on either side is `false`.
pub fn is_date_end_less_than_date_initial<D: PartialOrd>(
    initial: Option<D>,
    end: Option<D>,
) -> bool {
    compare_end_to_initial(initial, end).is_some_and(Ordering::is_lt)
}

/// `end == initial` as instants. Absent on either side is `false`.
pub fn is_date_initial_equal_date_end<D: PartialOrd>(initial: Option<D>, end: Option<D>) -> bool {
    compare_end_to_initial(initial, end).is_some_and(Ordering::is_eq)
}

/// Parse `text`, logging and discarding the failure reason.
fn parse_quietly(parser: &impl DateParser, text: Option<&str>) -> Option<NaiveDateTime> {
    let Some(text) = text else {
        debug!(pattern = parser.pattern(), "no date text to parse");
        return None;
    };
    match parser.parse(text) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            debug!(error = %err, "date parse failed");
            None
        }
    }
}

/// True if `text` is present, not blank, and parses under `parser`.
pub fn is_valid_date(text: Option<&str>, parser: &impl DateParser) -> bool {
    if is_blank(text) {
        return false;
    }
    parse_quietly(parser, text).is_some()
}

/// Parse both ends of an interval. `end` is not parsed when `begin` fails.
pub fn parse_interval(
    begin: Option<&str>,
    end: Option<&str>,
    parser: &impl DateParser,
) -> Option<DateInterval<NaiveDateTime>> {
    let initial = parse_quietly(parser, begin)?;
    let end = parse_quietly(parser, end)?;
    Some(DateInterval::new(initial, end))
}

/// True if both texts parse and `end >= begin`.
///
/// With a date-only pattern both ends are midnight, so a single-day interval
/// is valid.
pub fn is_interval_date_valid(
    begin: Option<&str>,
    end: Option<&str>,
    parser: &impl DateParser,
) -> bool {
    parse_interval(begin, end, parser).is_some_and(|interval| interval.is_valid())
}
