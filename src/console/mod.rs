//! Console context for command output
//!
//! A [`Console`] is built once per command invocation and owns everything
//! the formatting helpers need to know about the process's terminal:
//! - which streams accept color (stdout and stderr are decided separately)
//! - the terminal dimensions, detected on first use and then cached
//! - the input, output and error streams themselves
//!
//! Tests build one with in-memory streams through [`Console::with_io`].

mod progress;
mod prompt;

pub use progress::{render_bar, ProgressUpdate};
pub use prompt::{PromptError, PromptOptions, RuleValidator, Validator};

use std::cell::OnceCell;
use std::io::{self, BufRead, Read, Stderr, StdinLock, Stdout, Write};
use std::time::Duration;

use tracing::debug;

use crate::capability::{
    detect_color_support, detect_dimensions, Dimensions, EnvSnapshot, FixedTerminal, Stream,
    SystemTerminal, TerminalSize,
};
use crate::config::{ColorChoice, Config};
use crate::error::Result;
use crate::layout::{render_table, wrap_with_terminal_width};
use crate::style::Style;

/// Message shown by [`Console::wait`] when it waits for input.
pub const WAIT_MESSAGE: &str = "Press any key to continue...";

/// Widest line [`Console::prompt_by_key`] wraps option descriptions to.
pub const DESCRIPTION_WIDTH: usize = 125;

/// Console backed by the process's standard streams.
pub type StdConsole = Console<StdinLock<'static>, Stdout, Stderr>;

/// Construction parameters for a [`Console`].
pub struct ConsoleOptions {
    pub stdout_color: bool,
    pub stderr_color: bool,
    pub terminal: Box<dyn TerminalSize>,
    /// Used when `terminal` cannot report a size
    pub fallback: Dimensions,
    pub bar_width: usize,
    pub sleep: fn(Duration),
}

impl ConsoleOptions {
    /// No color, no terminal, default dimensions.
    pub fn plain() -> Self {
        Self {
            stdout_color: false,
            stderr_color: false,
            terminal: Box::new(FixedTerminal(None)),
            fallback: Dimensions::default(),
            bar_width: crate::config::default_bar_width(),
            sleep: std::thread::sleep,
        }
    }

    /// Options for the real terminal, honoring the configured color choice.
    pub fn from_config(config: &Config, env: &EnvSnapshot) -> Self {
        let (stdout_color, stderr_color) = match config.output.color {
            ColorChoice::Always => (true, true),
            ColorChoice::Never => (false, false),
            ColorChoice::Auto => (
                detect_color_support(Stream::Stdout, env),
                detect_color_support(Stream::Stderr, env),
            ),
        };
        debug!(choice = ?config.output.color, stdout_color, stderr_color, "Console color mode");

        Self {
            stdout_color,
            stderr_color,
            terminal: Box::new(SystemTerminal),
            fallback: config.terminal.fallback_dimensions(),
            bar_width: config.progress.bar_width,
            sleep: std::thread::sleep,
        }
    }
}

/// Per-invocation terminal context.
pub struct Console<R, W, E> {
    input: R,
    out: W,
    err: E,
    stdout_color: bool,
    stderr_color: bool,
    terminal: Box<dyn TerminalSize>,
    fallback: Dimensions,
    dimensions: OnceCell<Dimensions>,
    bar_width: usize,
    /// Step of the progress bar currently on screen
    progress: Option<u64>,
    sleep: fn(Duration),
}

impl StdConsole {
    /// Console on stdin/stdout/stderr with detected capabilities.
    pub fn stdio(config: &Config) -> Self {
        let options = ConsoleOptions::from_config(config, &EnvSnapshot::capture());
        Console::with_io(io::stdin().lock(), io::stdout(), io::stderr(), options)
    }
}

impl<R: BufRead, W: Write, E: Write> Console<R, W, E> {
    pub fn with_io(input: R, out: W, err: E, options: ConsoleOptions) -> Self {
        Self {
            input,
            out,
            err,
            stdout_color: options.stdout_color,
            stderr_color: options.stderr_color,
            terminal: options.terminal,
            fallback: options.fallback,
            dimensions: OnceCell::new(),
            bar_width: options.bar_width.max(1),
            progress: None,
            sleep: options.sleep,
        }
    }

    /// Give back the output and error streams.
    pub fn into_writers(self) -> (W, E) {
        (self.out, self.err)
    }

    pub fn is_colorized(&self, stream: Stream) -> bool {
        match stream {
            Stream::Stdout => self.stdout_color,
            Stream::Stderr => self.stderr_color,
        }
    }

    pub fn set_colorized(&mut self, stream: Stream, enabled: bool) {
        match stream {
            Stream::Stdout => self.stdout_color = enabled,
            Stream::Stderr => self.stderr_color = enabled,
        }
    }

    /// Color text destined for stdout.
    ///
    /// Color names are validated even when stdout does not accept color,
    /// in which case the text comes back unchanged.
    pub fn colorize(
        &self,
        text: &str,
        foreground: &str,
        background: Option<&str>,
        format: Option<&str>,
    ) -> Result<String> {
        self.colorize_for(Stream::Stdout, text, foreground, background, format)
    }

    /// Color text destined for `stream`.
    pub fn colorize_for(
        &self,
        stream: Stream,
        text: &str,
        foreground: &str,
        background: Option<&str>,
        format: Option<&str>,
    ) -> Result<String> {
        let style = Style::parse(foreground, background, format)?;
        if !self.is_colorized(stream) {
            return Ok(text.to_string());
        }
        Ok(style.paint(text))
    }

    /// Write a line to stdout.
    pub fn write(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{}", text)?;
        Ok(())
    }

    /// Write a colored line to stdout.
    pub fn write_colored(
        &mut self,
        text: &str,
        foreground: &str,
        background: Option<&str>,
    ) -> Result<()> {
        let text = self.colorize_for(Stream::Stdout, text, foreground, background, None)?;
        self.write(&text)
    }

    /// Write to stdout without a trailing newline.
    pub fn print(&mut self, text: &str) -> Result<()> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }

    /// Write a line to stderr.
    pub fn error(&mut self, text: &str) -> Result<()> {
        writeln!(self.err, "{}", text)?;
        Ok(())
    }

    /// Write a colored line to stderr, using stderr's color support.
    pub fn error_colored(
        &mut self,
        text: &str,
        foreground: &str,
        background: Option<&str>,
    ) -> Result<()> {
        let text = self.colorize_for(Stream::Stderr, text, foreground, background, None)?;
        self.error(&text)
    }

    pub fn new_line(&mut self, count: usize) -> Result<()> {
        for _ in 0..count {
            writeln!(self.out)?;
        }
        Ok(())
    }

    /// Clear the screen, or scroll it away when escape sequences are off.
    pub fn clear_screen(&mut self) -> Result<()> {
        if self.stdout_color {
            write!(self.out, "\x1b[H\x1b[2J")?;
            self.out.flush()?;
            Ok(())
        } else {
            self.new_line(40)
        }
    }

    /// Ring the terminal bell `count` times.
    pub fn beep(&mut self, count: usize) -> Result<()> {
        write!(self.out, "{}", "\x07".repeat(count))?;
        self.out.flush()?;
        Ok(())
    }

    /// Block for `seconds`.
    ///
    /// With `countdown`, the remaining seconds are printed as they pass.
    /// Without it, zero seconds means waiting for the user to press enter.
    pub fn wait(&mut self, seconds: u64, countdown: bool) -> Result<()> {
        if countdown {
            for remaining in (1..=seconds).rev() {
                self.print(&format!("{}... ", remaining))?;
                (self.sleep)(Duration::from_secs(1));
            }
            return self.new_line(1);
        }

        if seconds > 0 {
            (self.sleep)(Duration::from_secs(seconds));
            return Ok(());
        }

        self.write(WAIT_MESSAGE)?;
        self.out.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(())
    }

    /// Read the rest of the input.
    ///
    /// Commands read stdin through the console: the console already holds
    /// the stdin lock.
    pub fn read_all(&mut self) -> Result<String> {
        let mut text = String::new();
        self.input.read_to_string(&mut text)?;
        Ok(text)
    }

    /// Terminal dimensions, detected once.
    pub fn dimensions(&self) -> Dimensions {
        *self
            .dimensions
            .get_or_init(|| detect_dimensions(self.terminal.as_ref(), self.fallback))
    }

    pub fn width(&self) -> usize {
        self.dimensions().cols
    }

    pub fn height(&self) -> usize {
        self.dimensions().rows
    }

    /// Wrap text for this terminal. See [`wrap_with_terminal_width`].
    pub fn wrap(&self, text: &str, max_width: usize, left_pad: usize) -> String {
        wrap_with_terminal_width(Some(text), max_width, left_pad, self.width())
    }

    /// Render a table and write it to stdout in one piece.
    pub fn table<Row, S, H>(&mut self, rows: &[Row], header: &[H]) -> Result<()>
    where
        Row: AsRef<[S]>,
        S: AsRef<str>,
        H: AsRef<str>,
    {
        let table = render_table(rows, header);
        self.out.write_all(table.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}
