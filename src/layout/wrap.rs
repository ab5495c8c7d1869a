//! Word wrapping with a hanging indent.

use crate::capability::{detect_dimensions, SystemTerminal};
use crate::width::visual_width;

/// Greedily wrap `text` to `width` columns.
///
/// Breaks happen only at single spaces (each break consumes the space it
/// replaces); a word wider than `width` gets a line of its own. Existing
/// newlines are kept as hard breaks. Widths are visual widths, so colored
/// words wrap like plain ones. A `width` of zero is treated as one.
pub fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut words = paragraph.split(' ');
        let mut line = String::from(words.next().unwrap_or_default());
        let mut line_width = visual_width(Some(&line));

        for word in words {
            let word_width = visual_width(Some(word));
            if line_width + 1 + word_width <= width {
                line.push(' ');
                line.push_str(word);
                line_width += 1 + word_width;
            } else {
                lines.push(std::mem::replace(&mut line, word.to_string()));
                line_width = word_width;
            }
        }
        lines.push(line);
    }

    lines
}

/// Wrap `text` for a terminal that is `terminal_width` columns wide.
///
/// - `max_width == 0` means "use the terminal width"; a terminal narrower
///   than `max_width` clamps it.
/// - `left_pad` columns are reserved on the left: lines after the first are
///   indented by that many spaces. The first line is not indented because
///   it continues whatever the caller already printed on it.
/// - When `left_pad` leaves no room, every word goes on its own line.
pub fn wrap_with_terminal_width(
    text: Option<&str>,
    max_width: usize,
    left_pad: usize,
    terminal_width: usize,
) -> String {
    let text = match text {
        Some(text) if !text.is_empty() => text,
        _ => return String::new(),
    };

    let mut max = if max_width == 0 {
        terminal_width
    } else {
        max_width
    };
    if terminal_width < max {
        max = terminal_width;
    }

    let lines = wrap_lines(text, max.saturating_sub(left_pad));
    if left_pad == 0 {
        return lines.join("\n");
    }

    let indent = " ".repeat(left_pad);
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                line.clone()
            } else {
                format!("{}{}", indent, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wrap `text` against the width of the attached terminal.
///
/// Falls back to 80 columns when no terminal is attached. Commands that
/// wrap repeatedly should use [`Console::wrap`](crate::console::Console::wrap),
/// which detects the width once.
pub fn wrap(text: &str, max_width: usize, left_pad: usize) -> String {
    let dims = detect_dimensions(&SystemTerminal, Default::default());
    wrap_with_terminal_width(Some(text), max_width, left_pad, dims.cols)
}
