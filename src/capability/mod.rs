//! Terminal capability detection
//!
//! Decides whether a stream should receive escape sequences and how large
//! the terminal is. Environment variables are read once into an
//! [`EnvSnapshot`] so the rules can be tested without touching the process
//! environment.

mod size;

pub use size::{detect_dimensions, Dimensions, FixedTerminal, SystemTerminal, TerminalSize};

use std::env;

use tracing::debug;

/// Output stream a capability applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Operating system family, as far as color support cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Unix,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }
}

/// Environment variables consulted by color detection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    /// `NO_COLOR` (any value disables color)
    pub no_color: Option<String>,
    /// `TERM_PROGRAM`
    pub term_program: Option<String>,
    /// `ANSICON` (Windows)
    pub ansicon: Option<String>,
    /// `ConEmuANSI` (Windows)
    pub con_emu_ansi: Option<String>,
    /// `TERM`
    pub term: Option<String>,
}

impl EnvSnapshot {
    /// Read the variables from the process environment.
    pub fn capture() -> Self {
        let var = |name: &str| env::var_os(name).map(|v| v.to_string_lossy().into_owned());
        Self {
            no_color: var("NO_COLOR"),
            term_program: var("TERM_PROGRAM"),
            ansicon: var("ANSICON"),
            con_emu_ansi: var("ConEmuANSI"),
            term: var("TERM"),
        }
    }
}

/// What is known about a stream's device.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamProbe {
    pub is_terminal: bool,
    /// Windows console with virtual terminal processing enabled
    pub vt_processing: bool,
}

impl StreamProbe {
    pub fn of(stream: Stream) -> Self {
        let is_terminal = match stream {
            Stream::Stdout => atty::is(atty::Stream::Stdout),
            Stream::Stderr => atty::is(atty::Stream::Stderr),
        };
        Self {
            is_terminal,
            vt_processing: vt_processing(),
        }
    }
}

#[cfg(windows)]
fn vt_processing() -> bool {
    crossterm::ansi_support::supports_ansi()
}

#[cfg(not(windows))]
fn vt_processing() -> bool {
    false
}

/// Decide color support from already-gathered facts.
///
/// Priority: `NO_COLOR` disables, Hyper enables, then platform rules:
/// on Windows a VT-capable console or a known ANSI shim, elsewhere an
/// interactive terminal.
pub fn color_support(env: &EnvSnapshot, platform: Platform, probe: StreamProbe) -> bool {
    if env.no_color.is_some() {
        return false;
    }

    if env.term_program.as_deref() == Some("Hyper") {
        return true;
    }

    match platform {
        Platform::Windows => {
            probe.vt_processing
                || env.ansicon.is_some()
                || env.con_emu_ansi.as_deref() == Some("ON")
                || env.term.as_deref() == Some("xterm")
        }
        Platform::Unix => probe.is_terminal,
    }
}

/// Probe `stream` and decide whether it should receive color.
pub fn detect_color_support(stream: Stream, env: &EnvSnapshot) -> bool {
    let probe = StreamProbe::of(stream);
    let supported = color_support(env, Platform::current(), probe);
    debug!(?stream, ?probe, supported, "Color support detected");
    supported
}
