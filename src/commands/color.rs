//! Color command handler

use anyhow::Result;

use termkit::console::StdConsole;
use termkit::Config;

/// Print `text` in the requested colors.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    config: &Config,
    text: &str,
    fg: &str,
    bg: Option<&str>,
    underline: bool,
) -> Result<()> {
    let mut console = StdConsole::stdio(config);
    let format = underline.then_some("underline");
    let colored = console.colorize(text, fg, bg, format)?;
    console.write(&colored)?;
    Ok(())
}
