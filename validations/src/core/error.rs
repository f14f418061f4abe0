//! Typed errors raised by the pure validation core.
//!
//! Predicates are total and answer `false` instead of failing. Only two call
//! paths surface an error: the bounded-length check when its bounds are
//! inverted, and the parse capability itself (which predicates swallow).

/// Errors produced by `core` operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Caller supplied arguments that cannot describe a valid check.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Text did not match the date pattern.
    #[error("cannot parse '{text}' with pattern '{pattern}': {reason}")]
    Parse {
        text: String,
        pattern: String,
        reason: String,
    },

    /// The date pattern itself is not understood by the parser.
    #[error("invalid date pattern '{pattern}': {reason}")]
    InvalidFormat { pattern: String, reason: String },
}

impl ValidationError {
    /// Create an InvalidArgument error.
    pub fn invalid_argument(message: impl ToString) -> Self {
        Self::InvalidArgument(message.to_string())
    }

    /// Create a Parse error for `text` under `pattern`.
    pub fn parse(text: &str, pattern: &str, reason: impl ToString) -> Self {
        Self::Parse {
            text: text.to_string(),
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an InvalidFormat error.
    pub fn invalid_format(pattern: &str, reason: impl ToString) -> Self {
        Self::InvalidFormat {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        }
    }

    /// True for errors coming from a failed parse attempt.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

/// Result alias for fallible `core` operations.
pub type ValidationResult<T> = Result<T, ValidationError>;
