//! Width command handler

use anyhow::Result;

use termkit::console::StdConsole;
use termkit::{visual_width, Config};

/// Print the visible width of `text`.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config, text: &str) -> Result<()> {
    let mut console = StdConsole::stdio(config);
    console.write(&visual_width(Some(text)).to_string())?;
    Ok(())
}
