//! Table command handler

use anyhow::{Context, Result};

use termkit::console::StdConsole;
use termkit::Config;

/// Render stdin rows as a table.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config, header: bool, delimiter: &str, json: bool) -> Result<()> {
    let mut console = StdConsole::stdio(config);
    let input = console.read_all()?;

    let mut rows = if json {
        parse_json(&input)?
    } else {
        parse_delimited(&input, delimiter)
    };

    let head = if header && !rows.is_empty() {
        rows.remove(0)
    } else {
        Vec::new()
    };

    console.table(&rows, &head)?;
    Ok(())
}

/// One row per line, cells split on `delimiter`. Blank lines are skipped.
pub fn parse_delimited(input: &str, delimiter: &str) -> Vec<Vec<String>> {
    input
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            if delimiter.is_empty() {
                vec![line.to_string()]
            } else {
                line.split(delimiter).map(str::to_string).collect()
            }
        })
        .collect()
}

/// A JSON array of arrays of strings.
pub fn parse_json(input: &str) -> Result<Vec<Vec<String>>> {
    serde_json::from_str(input).context("Expected a JSON array of arrays of strings")
}
