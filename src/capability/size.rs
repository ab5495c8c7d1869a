//! Terminal dimension discovery.

use terminal_size::{Height, Width};
use tracing::{debug, trace};

/// Terminal size in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl Dimensions {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self { rows, cols }
    }
}

impl Default for Dimensions {
    /// 80 columns by 32 rows.
    fn default() -> Self {
        Self { rows: 32, cols: 80 }
    }
}

/// Source of terminal dimensions.
///
/// `None` means the size could not be determined (no terminal attached,
/// query failed).
pub trait TerminalSize {
    fn size(&self) -> Option<Dimensions>;
}

/// Queries the terminal attached to the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTerminal;

impl TerminalSize for SystemTerminal {
    fn size(&self) -> Option<Dimensions> {
        if let Some((Width(cols), Height(rows))) = terminal_size::terminal_size() {
            return Some(Dimensions::new(cols as usize, rows as usize));
        }

        match crossterm::terminal::size() {
            Ok((cols, rows)) => Some(Dimensions::new(cols as usize, rows as usize)),
            Err(e) => {
                trace!(error = %e, "crossterm size query failed");
                None
            }
        }
    }
}

/// A terminal with a fixed size, or none at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedTerminal(pub Option<Dimensions>);

impl TerminalSize for FixedTerminal {
    fn size(&self) -> Option<Dimensions> {
        self.0
    }
}

/// Ask `provider` for the terminal size, falling back to `fallback`.
///
/// A zero-sized answer counts as a failure. Failures are logged and never
/// returned to the caller.
pub fn detect_dimensions(provider: &dyn TerminalSize, fallback: Dimensions) -> Dimensions {
    match provider.size() {
        Some(dims) if dims.cols > 0 && dims.rows > 0 => {
            trace!(cols = dims.cols, rows = dims.rows, "Detected terminal size");
            dims
        }
        other => {
            debug!(
                detected = ?other,
                cols = fallback.cols,
                rows = fallback.rows,
                "Terminal size unavailable, using defaults"
            );
            fallback
        }
    }
}
