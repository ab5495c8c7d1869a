//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::capability::Dimensions;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub terminal: TerminalConfig,
    #[serde(default)]
    pub progress: ProgressConfig,
}

/// When to emit escape sequences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Detect per stream (`NO_COLOR`, terminal checks)
    #[default]
    Auto,
    /// Always colorize
    Always,
    /// Never colorize
    Never,
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorChoice,
}

/// Fallback dimensions used when the terminal size cannot be detected
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminalConfig {
    #[serde(default = "default_width")]
    pub default_width: usize,
    #[serde(default = "default_height")]
    pub default_height: usize,
}

pub fn default_width() -> usize {
    80
}

pub fn default_height() -> usize {
    32
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            default_width: default_width(),
            default_height: default_height(),
        }
    }
}

impl TerminalConfig {
    pub fn fallback_dimensions(&self) -> Dimensions {
        Dimensions::new(self.default_width, self.default_height)
    }
}

/// Progress bar configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressConfig {
    /// Number of cells in the bar
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,
}

pub fn default_bar_width() -> usize {
    10
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            bar_width: default_bar_width(),
        }
    }
}

impl Config {
    /// Reject values the console cannot work with.
    pub fn validate(&self) -> Result<(), String> {
        if self.terminal.default_width == 0 {
            return Err("terminal.default_width must be > 0".to_string());
        }
        if self.terminal.default_height == 0 {
            return Err("terminal.default_height must be > 0".to_string());
        }
        if self.progress.bar_width == 0 {
            return Err("progress.bar_width must be > 0".to_string());
        }
        if self.progress.bar_width > 200 {
            return Err(format!(
                "progress.bar_width {} exceeds maximum (200)",
                self.progress.bar_width
            ));
        }
        Ok(())
    }
}
