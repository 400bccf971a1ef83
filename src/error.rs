//! Crate-level error types.

use std::fmt;

/// Errors produced by the nitroso crate.
///
/// Only configuration I/O can fail. Runtime navigation problems (out of
/// range, busy, stuck transitions, missing visuals) are absorbed by the
/// step engine and logged instead.
#[derive(Debug)]
pub enum NitrosoError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for NitrosoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for NitrosoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for NitrosoError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
