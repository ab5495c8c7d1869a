//! termkit Library
//!
//! Terminal text layout for command-line programs: nesting-safe ANSI
//! colors, visual-width measurement, ASCII tables and word wrapping, plus
//! a [`Console`] context that tracks what the attached terminal supports.

pub mod args;
pub mod capability;
pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod layout;
pub mod style;
pub mod width;

pub use args::CommandArgs;
pub use capability::{Dimensions, EnvSnapshot, Stream, TerminalSize};
pub use config::{ColorChoice, Config};
pub use console::{Console, ConsoleOptions, ProgressUpdate, PromptOptions, RuleValidator, Validator};
pub use error::{FormatError, Result};
pub use layout::{render_table, wrap, wrap_with_terminal_width};
pub use style::{colorize, Style};
pub use width::{strip_codes, visual_width};

/// Version string shown by `--version`.
#[cfg(feature = "release")]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version string shown by `--version`.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "-", env!("VERGEN_GIT_SHA"));
