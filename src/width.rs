//! Visual width measurement
//!
//! Column alignment depends on knowing how many terminal cells a string
//! occupies. Escape sequences occupy none, and East Asian wide characters
//! occupy two.

use std::sync::OnceLock;

use tracing::trace;
use unicode_width::UnicodeWidthStr;
use vte::{Parser, Perform};

use crate::style::palette;

fn known_sequences() -> &'static [String] {
    static SEQUENCES: OnceLock<Vec<String>> = OnceLock::new();
    SEQUENCES.get_or_init(palette::known_sequences)
}

/// Remove every sequence the color encoder can emit.
///
/// Only the encoder's own vocabulary is removed; foreign escape sequences
/// are left in place (see [`strip_all_escapes`] for those).
pub fn strip_codes(text: &str) -> String {
    if !text.contains(palette::ESCAPE_PREFIX) {
        return text.to_string();
    }

    let sequences = known_sequences();
    let mut stripped = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        if c == '\x1b' {
            if let Some(seq) = sequences.iter().find(|seq| rest.starts_with(seq.as_str())) {
                rest = &rest[seq.len()..];
                continue;
            }
        }
        stripped.push(c);
        rest = &rest[c.len_utf8()..];
    }

    stripped
}

/// Number of terminal columns `text` occupies once color codes are removed.
///
/// `None` measures as zero.
pub fn visual_width(text: Option<&str>) -> usize {
    match text {
        Some(text) => strip_codes(text).width(),
        None => 0,
    }
}

/// Append spaces after `text` until it is `width` columns wide.
///
/// Text already at or beyond `width` is returned unchanged.
pub fn pad_right(text: &str, width: usize) -> String {
    let current = visual_width(Some(text));
    if current >= width {
        return text.to_string();
    }
    let mut padded = String::with_capacity(text.len() + width - current);
    padded.push_str(text);
    padded.extend(std::iter::repeat(' ').take(width - current));
    padded
}

/// Collects printable characters, dropping all control sequences.
struct PlainText {
    out: String,
}

impl Perform for PlainText {
    fn print(&mut self, c: char) {
        self.out.push(c);
    }

    fn execute(&mut self, byte: u8) {
        match byte {
            b'\n' | b'\t' => self.out.push(char::from(byte)),
            _ => trace!(byte, "Dropped control byte"),
        }
    }
}

/// Remove every escape sequence, not only the encoder's own.
///
/// Useful for text produced by other programs (cursor movement, 256-color
/// and truecolor SGR, OSC titles).
pub fn strip_all_escapes(text: &str) -> String {
    let mut parser = Parser::new();
    let mut plain = PlainText {
        out: String::with_capacity(text.len()),
    };
    parser.advance(&mut plain, text.as_bytes());
    plain.out
}
