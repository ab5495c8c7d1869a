//! ANSI color encoding
//!
//! Maps named colors to escape sequences and composes colored text so that
//! nested segments keep their own colors.

mod encoder;
pub mod palette;

pub use encoder::{colorize, runs, Run, Style};
pub use palette::{Format, BACKGROUND, FOREGROUND, RESET, UNDERLINE};
