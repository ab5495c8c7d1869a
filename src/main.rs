//! termkit - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use termkit::cli::{Cli, Commands, ConfigCommands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = commands::load_config(cli.config.as_deref(), cli.color)?;

    match cli.command {
        Commands::Color {
            text,
            fg,
            bg,
            underline,
        } => commands::color::handle(&config, &text, &fg, bg.as_deref(), underline),
        Commands::Width { text } => commands::width::handle(&config, &text),
        Commands::Strip { all } => commands::strip::handle(&config, all),
        Commands::Table {
            header,
            delimiter,
            json,
        } => commands::table::handle(&config, header, &delimiter, json),
        Commands::Wrap { width, pad } => commands::wrap::handle(&config, width, pad),
        Commands::Colors => commands::colors::handle(&config),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(&config),
            ConfigCommands::Init => commands::config::handle_init(cli.config.as_deref()),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}

/// Log to stderr, filtered by `TERMKIT_LOG` (defaults to warnings only).
fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("TERMKIT_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("termkit={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
