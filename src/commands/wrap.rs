//! Wrap command handler

use anyhow::Result;

use termkit::console::StdConsole;
use termkit::Config;

/// Wrap stdin to `width` columns with `pad` columns of hanging indent.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config, width: usize, pad: usize) -> Result<()> {
    let mut console = StdConsole::stdio(config);
    let input = console.read_all()?;
    let text = input.trim_end_matches(&['\n', '\r'][..]);
    if text.is_empty() {
        return Ok(());
    }
    let wrapped = console.wrap(text, width, pad);
    console.write(&wrapped)?;
    Ok(())
}
