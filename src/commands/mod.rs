//! Command handlers for the termkit CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod color;
pub mod colors;
pub mod completions;
pub mod config;
pub mod strip;
pub mod table;
pub mod width;
pub mod wrap;

use anyhow::Result;
use std::path::Path;

use termkit::{ColorChoice, Config};

/// Load the config file (explicit path or the default location) and apply
/// the `--color` override.
pub fn load_config(path: Option<&Path>, color: Option<ColorChoice>) -> Result<Config> {
    let mut config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(color) = color {
        config.output.color = color;
    }
    Ok(config)
}
