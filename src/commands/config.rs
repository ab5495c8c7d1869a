//! Config subcommands handler

use anyhow::Result;
use std::path::Path;

use termkit::console::StdConsole;
use termkit::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config: &Config) -> Result<()> {
    let mut console = StdConsole::stdio(config);
    let toml_str = toml::to_string_pretty(config)?;
    console.print(&toml_str)?;
    Ok(())
}

/// Write the default configuration unless a file already exists.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(path: Option<&Path>) -> Result<()> {
    let config_path = match path {
        Some(path) => path.to_path_buf(),
        None => Config::config_path()?,
    };

    let default = Config::default();
    let mut console = StdConsole::stdio(&default);

    if config_path.exists() {
        console.write(&format!(
            "Config already exists: {}",
            config_path.display()
        ))?;
        return Ok(());
    }

    default.save_to(&config_path)?;
    let created = console.colorize("Created", "green", None, None)?;
    console.write(&format!("{} {}", created, config_path.display()))?;
    Ok(())
}
