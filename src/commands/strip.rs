//! Strip command handler

use anyhow::Result;

use termkit::console::StdConsole;
use termkit::width::{strip_all_escapes, strip_codes};
use termkit::Config;

/// Copy stdin to stdout without color codes.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config, all: bool) -> Result<()> {
    let mut console = StdConsole::stdio(config);
    let input = console.read_all()?;
    let plain = if all {
        strip_all_escapes(&input)
    } else {
        strip_codes(&input)
    };
    console.print(&plain)?;
    Ok(())
}
