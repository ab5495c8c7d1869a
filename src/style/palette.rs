//! Named color registries and escape-sequence vocabulary.
//!
//! The codes are part of the output format: scripts and tests compare
//! colored output byte for byte, so entries must never change.

use std::str::FromStr;

use crate::error::FormatError;

/// ANSI reset sequence
pub const RESET: &str = "\x1b[0m";

/// Underline sequence
pub const UNDERLINE: &str = "\x1b[4m";

/// Control sequence introducer every color sequence starts with
pub const ESCAPE_PREFIX: &str = "\x1b[";

/// Foreground colors, in registry order.
pub const FOREGROUND: [(&str, &str); 17] = [
    ("black", "0;30"),
    ("dark_gray", "1;30"),
    ("blue", "0;34"),
    ("dark_blue", "0;34"),
    ("light_blue", "1;34"),
    ("green", "0;32"),
    ("light_green", "1;32"),
    ("cyan", "0;36"),
    ("light_cyan", "1;36"),
    ("red", "0;31"),
    ("light_red", "1;31"),
    ("purple", "0;35"),
    ("light_purple", "1;35"),
    ("yellow", "0;33"),
    ("light_yellow", "1;33"),
    ("light_gray", "0;37"),
    ("white", "1;37"),
];

/// Background colors, in registry order.
pub const BACKGROUND: [(&str, &str); 8] = [
    ("black", "40"),
    ("red", "41"),
    ("green", "42"),
    ("yellow", "43"),
    ("blue", "44"),
    ("magenta", "45"),
    ("cyan", "46"),
    ("light_gray", "47"),
];

/// Look up a foreground code by its exact (case-sensitive) name.
pub fn foreground_code(name: &str) -> Option<&'static str> {
    FOREGROUND
        .iter()
        .find(|(color, _)| *color == name)
        .map(|(_, code)| *code)
}

/// Look up a background code by its exact (case-sensitive) name.
pub fn background_code(name: &str) -> Option<&'static str> {
    BACKGROUND
        .iter()
        .find(|(color, _)| *color == name)
        .map(|(_, code)| *code)
}

/// Build the escape sequence for a raw code, e.g. `0;31` -> `ESC[0;31m`.
pub fn sequence(code: &str) -> String {
    format!("{}{}m", ESCAPE_PREFIX, code)
}

/// Every sequence the encoder can emit.
///
/// Ordered longest first so a left-to-right scan always matches a whole
/// sequence before any shorter one sharing its prefix.
pub fn known_sequences() -> Vec<String> {
    let mut sequences: Vec<String> = FOREGROUND
        .iter()
        .chain(BACKGROUND.iter())
        .map(|(_, code)| sequence(code))
        .chain([UNDERLINE.to_string(), RESET.to_string()])
        .collect();
    sequences.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    sequences.dedup();
    sequences
}

/// Text format modifiers accepted by the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Underline,
}

impl Format {
    pub fn sequence(&self) -> &'static str {
        match self {
            Format::Underline => UNDERLINE,
        }
    }
}

impl FromStr for Format {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "underline" => Ok(Format::Underline),
            other => Err(FormatError::InvalidFormat {
                name: other.to_string(),
            }),
        }
    }
}
