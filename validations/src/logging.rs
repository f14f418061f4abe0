//! Diagnostic tracing for the `validations` binary.
//!
//! The library only emits events (swallowed parse failures, rejected length
//! bounds, day classification). Installing a subscriber is the binary's job.
//! Diagnostics go to stderr so stdout carries nothing but check results.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_DIRECTIVES: &str = "warn";

/// Build the event filter from `RUST_LOG`-style directives.
///
/// Unset or unparsable directives fall back to `warn`.
pub fn filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Install the stderr subscriber, filtered by `RUST_LOG`.
///
/// ```bash
/// RUST_LOG=validations=debug validations date valid 02-02-2007
/// ```
pub fn init() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    // A subscriber installed earlier (e.g. by a test harness) wins.
    let _ = tracing_subscriber::registry()
        .with(filter(directives.as_deref()))
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_directives_default_to_warn() {
        assert_eq!(filter(None).to_string(), "warn");
    }

    #[test]
    fn explicit_directives_are_kept() {
        assert_eq!(
            filter(Some("validations=debug")).to_string(),
            "validations=debug"
        );
    }

    #[test]
    fn unparsable_directives_fall_back() {
        assert_eq!(filter(Some("validations=loud")).to_string(), "warn");
    }
}
