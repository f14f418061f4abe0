//! Test-only helpers for fixed days, date formats and config directories.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use tempfile::TempDir;

use crate::core::format::DateFormat;
use crate::io::config::DEFAULT_CONFIG_FILE;

/// Calendar day; panics on an impossible date.
pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar day")
}

/// Wall-clock value on `date`; panics on an impossible time.
pub fn at(date: NaiveDate, hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    date.and_hms_opt(hour, minute, second).expect("valid time of day")
}

/// The `dd/mm/yyyy` pattern used throughout the examples.
pub fn dmy() -> DateFormat {
    DateFormat::default()
}

/// Temporary working directory holding an optional `validations.toml`.
pub struct ConfigDir {
    dir: TempDir,
}

impl ConfigDir {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create temp dir")?;
        Ok(Self { dir })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.root().join(DEFAULT_CONFIG_FILE)
    }

    /// Write `contents` to the default config file and return its path.
    pub fn write_config(&self, contents: &str) -> Result<PathBuf> {
        let path = self.config_path();
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }
}
