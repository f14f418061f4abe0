//! Stable exit codes for `validations` commands.

/// The check held (or a non-check command such as `init` succeeded).
pub const PASS: i32 = 0;
/// The check was evaluated and did not hold.
pub const FAIL: i32 = 1;
/// Bad arguments, bad config, or other errors; no check result.
pub const INVALID: i32 = 2;
