//! Optional `validations.toml` configuration.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::format::DateFormat;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "validations.toml";

/// Command configuration (TOML).
///
/// Every field is optional in the file; missing fields take the defaults
/// below.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ValidationsConfig {
    /// chrono strftime pattern used by the date commands.
    pub date_format: DateFormat,

    /// Pin "today" (`YYYY-MM-DD`) for relative-day checks instead of reading
    /// the local clock.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub today: Option<NaiveDate>,

    pub length: LengthConfig,
}

/// Default bounds for `validations length`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LengthConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<usize>,
}

impl Default for ValidationsConfig {
    fn default() -> Self {
        Self {
            date_format: DateFormat::default(),
            today: None,
            length: LengthConfig::default(),
        }
    }
}

impl ValidationsConfig {
    pub fn validate(&self) -> Result<()> {
        match (self.length.min, self.length.max) {
            (Some(min), Some(max)) if min > max => Err(anyhow!(
                "length.min ({min}) must be less than or equal to length.max ({max})"
            )),
            _ => Ok(()),
        }
    }
}

/// Load and validate `path`; a missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<ValidationsConfig> {
    let cfg = match fs::read_to_string(path) {
        Ok(contents) => toml::from_str::<ValidationsConfig>(&contents)
            .with_context(|| format!("parse {}", path.display()))?,
        Err(err) if err.kind() == ErrorKind::NotFound => ValidationsConfig::default(),
        Err(err) => return Err(err).with_context(|| format!("read {}", path.display())),
    };
    cfg.validate()?;
    Ok(cfg)
}

/// Validate `cfg` and replace `path` with it via a sibling temp file.
pub fn write_config(path: &Path, cfg: &ValidationsConfig) -> Result<()> {
    cfg.validate()?;
    let contents = toml::to_string_pretty(cfg).context("serialize config toml")?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create directory {}", dir.display()))?;
    }
    let staged = path.with_extension("toml.tmp");
    fs::write(&staged, contents).with_context(|| format!("write {}", staged.display()))?;
    fs::rename(&staged, path).with_context(|| format!("replace config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, ValidationsConfig::default());
        assert_eq!(cfg.date_format.as_str(), "%d/%m/%Y");
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("nested").join("validations.toml");
        let cfg = ValidationsConfig {
            date_format: DateFormat::new("%Y-%m-%d").expect("pattern"),
            today: NaiveDate::from_ymd_opt(2024, 3, 1),
            length: LengthConfig {
                min: Some(1),
                max: Some(40),
            },
        };
        write_config(&path, &cfg).expect("write");
        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("validations.toml");
        fs::write(&path, "today = \"2024-03-01\"\n").expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.date_format, DateFormat::default());
        assert_eq!(cfg.today, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(cfg.length, LengthConfig::default());
    }

    #[test]
    fn rejects_unknown_date_specifier() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("validations.toml");
        fs::write(&path, "date_format = \"%d/%Q\"\n").expect("write");
        let err = load_config(&path).expect_err("bad pattern");
        assert!(format!("{err:#}").contains("invalid date pattern"));
    }

    #[test]
    fn unreadable_path_is_an_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let err = load_config(temp.path()).expect_err("directory is not a file");
        assert!(err.to_string().starts_with("read "));
    }

    #[test]
    fn rejects_inverted_length_bounds() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("validations.toml");
        fs::write(&path, "[length]\nmin = 5\nmax = 2\n").expect("write");
        let err = load_config(&path).expect_err("min > max");
        assert!(err.to_string().contains("length.min"));
    }
}
