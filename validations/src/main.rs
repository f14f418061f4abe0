//! Command-line front end for the validation predicates.
//!
//! Each check prints `pass` or `fail` and exits with the matching code from
//! [`validations::exit_codes`], so shell scripts can branch on it directly.
//! An omitted VALUE is the absent value, not the empty string.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use validations::check::{
    CheckOutcome, LengthBounds, TextCheck, check_length, classify_text, matching_classes,
    resolve_format, resolve_today,
};
use validations::core::date::{is_interval_date_valid, is_valid_date};
use validations::exit_codes;
use validations::io::config::{
    DEFAULT_CONFIG_FILE, ValidationsConfig, load_config, write_config,
};
use validations::logging;

#[derive(Parser)]
#[command(
    name = "validations",
    version,
    about = "Null-tolerant string and calendar-day checks"
)]
struct Cli {
    /// Config file (defaults to `validations.toml` in the working directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a default config file if missing.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
    /// Apply one text predicate (empty, blank, only-letters, numeric-space, ...).
    Text {
        check: TextCheck,
        value: Option<String>,
    },
    /// List every character class the value belongs to.
    Classes {
        value: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Check trimmed length against --min and/or --max.
    Length {
        value: Option<String>,
        #[arg(long)]
        min: Option<usize>,
        #[arg(long)]
        max: Option<usize>,
    },
    /// Date text checks.
    #[command(subcommand)]
    Date(DateCommand),
}

#[derive(Subcommand)]
enum DateCommand {
    /// Check that TEXT parses under the date pattern.
    Valid {
        text: Option<String>,
        #[command(flatten)]
        format: FormatArg,
    },
    /// Check that BEGIN and END parse and END is not before BEGIN.
    Interval {
        begin: Option<String>,
        end: Option<String>,
        #[command(flatten)]
        format: FormatArg,
    },
    /// Print where TEXT falls relative to today, with the day offset.
    Classify {
        text: String,
        #[command(flatten)]
        format: FormatArg,
        /// Reference day (YYYY-MM-DD) instead of the local date.
        #[arg(long)]
        today: Option<NaiveDate>,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct FormatArg {
    /// chrono strftime pattern, e.g. `%d/%m/%Y`.
    #[arg(long = "format")]
    pattern: Option<String>,
}

fn main() {
    logging::init();
    match run() {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<CheckOutcome> {
    let cli = Cli::parse();
    let config_path = cli
        .config
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    match cli.command {
        Command::Init { force } => cmd_init(&config_path, force),
        Command::Text { check, value } => report(check.evaluate(value.as_deref())),
        Command::Classes { value, json } => cmd_classes(value.as_deref(), json),
        Command::Length { value, min, max } => {
            let config = load_config(&config_path).context("load config")?;
            let bounds = LengthBounds::resolve(min, max, &config);
            let passed = check_length(value.as_deref(), bounds).context("check length")?;
            report(passed)
        }
        Command::Date(command) => {
            let config = load_config(&config_path).context("load config")?;
            cmd_date(command, &config)
        }
    }
}

fn cmd_init(path: &Path, force: bool) -> Result<CheckOutcome> {
    if !force && path.exists() {
        info!(path = %path.display(), "config already present");
        return Ok(CheckOutcome::Pass);
    }
    write_config(path, &ValidationsConfig::default())
        .with_context(|| format!("write {}", path.display()))?;
    println!("{}", path.display());
    Ok(CheckOutcome::Pass)
}

fn cmd_classes(value: Option<&str>, json: bool) -> Result<CheckOutcome> {
    let classes = matching_classes(value);
    if json {
        print_json(&classes)?;
    } else {
        for class in &classes {
            println!("{}", class.name());
        }
    }
    Ok(CheckOutcome::from(!classes.is_empty()))
}

fn cmd_date(command: DateCommand, config: &ValidationsConfig) -> Result<CheckOutcome> {
    match command {
        DateCommand::Valid { text, format } => {
            let format = resolve_format(format.pattern.as_deref(), config)?;
            report(is_valid_date(text.as_deref(), &format))
        }
        DateCommand::Interval { begin, end, format } => {
            let format = resolve_format(format.pattern.as_deref(), config)?;
            report(is_interval_date_valid(
                begin.as_deref(),
                end.as_deref(),
                &format,
            ))
        }
        DateCommand::Classify {
            text,
            format,
            today,
            json,
        } => {
            let format = resolve_format(format.pattern.as_deref(), config)?;
            let today = resolve_today(today, config);
            match classify_text(&text, &format, today) {
                Ok(day) if json => {
                    print_json(&day)?;
                    Ok(CheckOutcome::Pass)
                }
                Ok(day) => {
                    println!("{day}");
                    Ok(CheckOutcome::Pass)
                }
                Err(err) => {
                    eprintln!("{err}");
                    Ok(CheckOutcome::Fail)
                }
            }
        }
    }
}

fn report(passed: bool) -> Result<CheckOutcome> {
    let outcome = CheckOutcome::from(passed);
    println!("{outcome}");
    Ok(outcome)
}

/// Serialize `value` to pretty-printed JSON on stdout.
fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value).context("serialize json")?;
    println!("{payload}");
    Ok(())
}
