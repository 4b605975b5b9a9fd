//! Crate-level error types.

use std::fmt;

/// Errors produced by the glidepath crate.
///
/// Transition outcomes are not errors: they travel as `bool` through
/// completion callbacks. This type only covers the fallible I/O surfaces.
#[derive(Debug)]
pub enum GlidepathError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for GlidepathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for GlidepathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for GlidepathError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
