//! Single-line progress bar.

use std::io::{BufRead, Write};

use super::Console;
use crate::error::Result;
use crate::style::Style;

/// Moves the cursor up one line so the next bar overwrites the last one.
const CURSOR_UP: &str = "\x1b[1A";

/// A progress event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressUpdate {
    /// `current` of `total` steps are done.
    Step { current: u64, total: u64 },
    /// The work finished; ends the bar.
    Done,
}

/// Render a bar such as `[####......]  40% Complete`.
///
/// `total` below 1 counts as 1 and `current` is clamped to `total`.
pub fn render_bar(current: u64, total: u64, bar_width: usize, colorize: bool) -> String {
    let total = total.max(1);
    let current = current.min(total);
    let percent = (u128::from(current) * 100 / u128::from(total)) as u64;
    let filled = ((u128::from(percent) * bar_width as u128 + 50) / 100) as usize;
    let filled = filled.min(bar_width);

    let cells = format!(
        "{}{}",
        "#".repeat(filled),
        ".".repeat(bar_width.saturating_sub(filled))
    );
    let cells = match Style::new("green", None) {
        Ok(green) if colorize => green.paint(&cells),
        _ => cells,
    };

    format!("[{}] {:>3}% Complete", cells, percent)
}

impl<R: BufRead, W: Write, E: Write> Console<R, W, E> {
    /// Draw or advance the progress bar on stdout.
    ///
    /// While a bar is on screen and progress does not go backwards, the
    /// new bar replaces the previous line.
    pub fn show_progress(&mut self, update: ProgressUpdate) -> Result<()> {
        match update {
            ProgressUpdate::Step { current, total } => {
                if matches!(self.progress, Some(previous) if previous <= current) {
                    write!(self.out, "{}", CURSOR_UP)?;
                }
                self.progress = Some(current);

                let bar = render_bar(current, total, self.bar_width, self.stdout_color);
                writeln!(self.out, "{}", bar)?;
            }
            ProgressUpdate::Done => {
                self.progress = None;
                write!(self.out, "\x07")?;
            }
        }
        self.out.flush()?;
        Ok(())
    }
}
