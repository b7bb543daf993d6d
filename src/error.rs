//! Crate-level error types.

use std::fmt;

/// Errors produced by the sortvis crate.
///
/// The step engines themselves never fail; only configuration and I/O do.
#[derive(Debug)]
pub enum SortvisError {
    /// Rejected configuration (non-positive length or fps, mismatched
    /// value list).
    Config(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// A value, algorithm or key name that could not be parsed.
    InvalidValue(String),
}

impl fmt::Display for SortvisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "configuration error: {msg}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidValue(msg) => write!(f, "invalid value: {msg}"),
        }
    }
}

impl std::error::Error for SortvisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SortvisError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
