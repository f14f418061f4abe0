//! Pure validation logic: string predicates and calendar-day comparisons.
//!
//! Core modules must be free of I/O side effects. The only ambient input is
//! the local wall clock, read exclusively by `date::today` and the `*_now`
//! wrappers built on it.

pub mod date;
pub mod error;
pub mod format;
pub mod text;
pub mod types;
