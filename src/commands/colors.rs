//! Colors command handler

use anyhow::Result;

use termkit::console::StdConsole;
use termkit::style::{BACKGROUND, FOREGROUND};
use termkit::Config;

const SAMPLE: &str = "The quick brown fox";

/// Print both color registries as tables, each entry shown in its color.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config) -> Result<()> {
    let mut console = StdConsole::stdio(config);

    let mut foreground = Vec::with_capacity(FOREGROUND.len());
    for (name, code) in FOREGROUND {
        let sample = console.colorize(SAMPLE, name, None, None)?;
        foreground.push(vec![name.to_string(), code.to_string(), sample]);
    }
    console.table(&foreground, &["Foreground", "Code", "Sample"])?;
    console.new_line(1)?;

    let mut background = Vec::with_capacity(BACKGROUND.len());
    for (name, code) in BACKGROUND {
        let sample = console.colorize(SAMPLE, "white", Some(name), None)?;
        background.push(vec![name.to_string(), code.to_string(), sample]);
    }
    console.table(&background, &["Background", "Code", "Sample"])?;
    Ok(())
}
