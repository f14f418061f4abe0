//! I/O helpers for the `validations` command.

pub mod config;
