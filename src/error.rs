//! Crate-level error types.

use std::fmt;

/// Errors produced by the tactile crate.
///
/// Pointer queries never fail (they return defaults); errors only arise
/// from configuration I/O and parsing.
#[derive(Debug)]
pub enum TactileError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for TactileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for TactileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for TactileError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
