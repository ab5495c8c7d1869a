//! CLI definitions for termkit
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages, markdown).

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

use crate::config::ColorChoice;

/// Build clap styles matching the colors termkit itself prints with.
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "termkit")]
#[command(about = "Color, measure, tabulate and wrap terminal text")]
#[command(
    long_about = "termkit - terminal text-layout toolkit.

Colors text with named ANSI colors (nesting-safe: already colored parts keep
their color), measures the visible width of colored text, renders aligned
ASCII tables and wraps paragraphs with a hanging indent.

QUICK START:
    termkit color \"hello\" --fg green        Print green text
    termkit width \"$(ls --color=always)\"    Visible width, codes ignored
    printf 'a\\tb\\n1\\t2\\n' | termkit table --header
    termkit wrap --width 40 --pad 4 < notes.txt"
)]
#[command(version = crate::VERSION)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// When to emit color (overrides the config file)
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorChoice>,

    /// Use this config file instead of ~/.config/termkit/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print text in color
    #[command(long_about = "Print text in a named foreground color, optionally on a
background color and underlined.

Text that already contains colored parts keeps those parts' colors.
Unknown color names are an error. Use 'termkit colors' to list names.

EXAMPLES:
    termkit color done --fg green
    termkit color WARN --fg white --bg red --underline")]
    Color {
        /// Text to color
        text: String,
        /// Foreground color name
        #[arg(long, default_value = "white")]
        fg: String,
        /// Background color name
        #[arg(long)]
        bg: Option<String>,
        /// Underline the text
        #[arg(long)]
        underline: bool,
    },

    /// Print the visible width of text
    Width {
        /// Text to measure (may contain color codes)
        text: String,
    },

    /// Remove color codes from stdin
    Strip {
        /// Remove every escape sequence, not only termkit's own colors
        #[arg(long)]
        all: bool,
    },

    /// Render stdin rows as an ASCII table
    #[command(long_about = "Render rows read from stdin as an ASCII table.

Each input line is a row; cells are separated by the delimiter (tab by
default). With --json, stdin is a JSON array of arrays of strings.

EXAMPLES:
    printf 'name\\tsize\\nlib.rs\\t120\\n' | termkit table --header
    echo '[[\"a\",\"b\"],[\"c\",\"d\"]]' | termkit table --json")]
    Table {
        /// Treat the first row as the header
        #[arg(long)]
        header: bool,
        /// Cell delimiter
        #[arg(long, short, default_value = "\t")]
        delimiter: String,
        /// Read rows as JSON
        #[arg(long, conflicts_with = "delimiter")]
        json: bool,
    },

    /// Wrap stdin to the terminal width
    Wrap {
        /// Maximum line width (0 = terminal width)
        #[arg(long, short, default_value_t = 0)]
        width: usize,
        /// Indent continuation lines by this many spaces
        #[arg(long, short, default_value_t = 0)]
        pad: usize,
    },

    /// List the available color names
    Colors,

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(long, value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    Show,
    /// Write the default configuration file if none exists
    Init,
}
