//! Errors raised by the formatting engine.

use std::fmt;

/// Which color registry a lookup went to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorKind {
    Foreground,
    Background,
}

impl fmt::Display for ColorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorKind::Foreground => write!(f, "foreground"),
            ColorKind::Background => write!(f, "background"),
        }
    }
}

/// Errors that can occur while formatting terminal output.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("Invalid {kind} color: {name}")]
    InvalidColorName { kind: ColorKind, name: String },

    #[error("Invalid text format: {name} (only \"underline\" is supported)")]
    InvalidFormat { name: String },

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl FormatError {
    pub(crate) fn foreground(name: &str) -> Self {
        FormatError::InvalidColorName {
            kind: ColorKind::Foreground,
            name: name.to_string(),
        }
    }

    pub(crate) fn background(name: &str) -> Self {
        FormatError::InvalidColorName {
            kind: ColorKind::Background,
            name: name.to_string(),
        }
    }
}

/// Result alias for formatting operations.
pub type Result<T> = std::result::Result<T, FormatError>;
