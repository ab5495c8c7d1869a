//! Nesting-safe color composition.
//!
//! Text handed to [`Style::paint`] may already contain colored segments
//! (e.g. a colored file name inside a colored sentence). Wrapping such text
//! naively leaves the inner reset terminating the outer color early, so the
//! rest of the sentence prints uncolored. The encoder splits the input into
//! styled and plain runs and only paints the plain ones.

use super::palette::{self, Format, ESCAPE_PREFIX, RESET};
use crate::error::{FormatError, Result};

/// A contiguous piece of formatted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Run<'a> {
    /// Text without escape sequences.
    Plain(&'a str),
    /// An escape prefix up to and including the next reset, or to the end
    /// of the text when the sequence is never closed.
    Styled(&'a str),
}

/// Split formatted text into plain and styled runs.
///
/// Concatenating the runs always reproduces the input. Empty plain runs are
/// never produced.
pub fn runs(text: &str) -> Vec<Run<'_>> {
    let mut runs = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let Some(offset) = text[pos..].find(ESCAPE_PREFIX) else {
            runs.push(Run::Plain(&text[pos..]));
            break;
        };

        let start = pos + offset;
        if start > pos {
            runs.push(Run::Plain(&text[pos..start]));
        }

        let end = text[start..]
            .find(RESET)
            .map(|reset| start + reset + RESET.len())
            .unwrap_or(text.len());
        runs.push(Run::Styled(&text[start..end]));
        pos = end;
    }

    runs
}

/// A validated foreground/background/format combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    foreground: &'static str,
    background: Option<&'static str>,
    format: Option<Format>,
}

impl Style {
    /// Resolve color names against the registries.
    ///
    /// Unknown names are errors; nothing is substituted.
    pub fn new(foreground: &str, background: Option<&str>) -> Result<Self> {
        let fg = palette::foreground_code(foreground)
            .ok_or_else(|| FormatError::foreground(foreground))?;
        let bg = match background {
            Some(name) => {
                Some(palette::background_code(name).ok_or_else(|| FormatError::background(name))?)
            }
            None => None,
        };

        Ok(Self {
            foreground: fg,
            background: bg,
            format: None,
        })
    }

    /// Same as [`Style::new`], with an optional format name such as `"underline"`.
    pub fn parse(foreground: &str, background: Option<&str>, format: Option<&str>) -> Result<Self> {
        let style = Self::new(foreground, background)?;
        match format {
            Some(name) => Ok(style.with_format(name.parse()?)),
            None => Ok(style),
        }
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    /// Opening sequences: foreground, then background, then format.
    pub fn prefix(&self) -> String {
        let mut prefix = palette::sequence(self.foreground);
        if let Some(bg) = self.background {
            prefix.push_str(&palette::sequence(bg));
        }
        if let Some(format) = self.format {
            prefix.push_str(format.sequence());
        }
        prefix
    }

    /// Color `text`, leaving already-styled runs untouched.
    ///
    /// Text without a reset is wrapped as a whole, whatever escape
    /// sequences it carries. A styled run left open at the end is closed,
    /// so the output always ends with a reset.
    pub fn paint(&self, text: &str) -> String {
        let prefix = self.prefix();
        if !text.contains(RESET) {
            return format!("{}{}{}", prefix, text, RESET);
        }

        let runs = runs(text);
        let mut painted = String::with_capacity(text.len() + prefix.len() * runs.len());
        for run in runs {
            match run {
                Run::Plain(plain) => {
                    painted.push_str(&prefix);
                    painted.push_str(plain);
                    painted.push_str(RESET);
                }
                Run::Styled(styled) => {
                    painted.push_str(styled);
                    if !styled.ends_with(RESET) {
                        painted.push_str(RESET);
                    }
                }
            }
        }
        painted
    }
}

/// Color `text` with named colors.
///
/// This always emits escape sequences; use
/// [`Console::colorize`](crate::console::Console::colorize) to respect the
/// terminal's color support.
pub fn colorize(
    text: &str,
    foreground: &str,
    background: Option<&str>,
    format: Option<&str>,
) -> Result<String> {
    Ok(Style::parse(foreground, background, format)?.paint(text))
}
