//! xtask - Build tasks for termkit
//!
//! Run with: cargo xtask <command>
//!
//! Commands:
//! - gen-docs: Generate documentation (man pages, COMMANDS.md)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Arg, Command, CommandFactory, Parser, Subcommand};

use termkit::cli::Cli;
use termkit::render_table;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build tasks for termkit")]
struct Xtask {
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Subcommand)]
enum XtaskCommand {
    /// Generate documentation from CLI definitions
    #[command(name = "gen-docs")]
    GenDocs {
        /// Output directory (default: docs/)
        #[arg(long, short, default_value = "docs")]
        output: PathBuf,

        /// Generate man pages
        #[arg(long)]
        man: bool,

        /// Generate COMMANDS.md
        #[arg(long)]
        markdown: bool,
    },
}

fn main() -> Result<()> {
    let args = Xtask::parse();

    match args.command {
        XtaskCommand::GenDocs {
            output,
            man,
            markdown,
        } => {
            // If no specific format is specified, generate all
            let gen_all = !man && !markdown;

            if gen_all || man {
                generate_man_pages(&output)?;
            }
            if gen_all || markdown {
                generate_markdown(&output)?;
            }
        }
    }

    Ok(())
}

fn visible_subcommands(cmd: &Command) -> impl Iterator<Item = &Command> {
    cmd.get_subcommands().filter(|sub| !sub.is_hide_set())
}

fn is_builtin(arg: &Arg) -> bool {
    let id = arg.get_id().as_str();
    id == "help" || id == "version"
}

/// Generate man pages using clap_mangen
fn generate_man_pages(output: &Path) -> Result<()> {
    use clap_mangen::Man;

    let man_dir = output.join("man");
    fs::create_dir_all(&man_dir).context("Failed to create man directory")?;

    let cmd = Cli::command();
    write_man_page(&man_dir.join("termkit.1"), cmd.clone())?;

    for subcommand in visible_subcommands(&cmd) {
        let name = subcommand.get_name();
        write_man_page(
            &man_dir.join(format!("termkit-{}.1", name)),
            subcommand.clone(),
        )?;

        for nested in visible_subcommands(subcommand) {
            write_man_page(
                &man_dir.join(format!("termkit-{}-{}.1", name, nested.get_name())),
                nested.clone(),
            )?;
        }
    }

    fn write_man_page(path: &Path, cmd: Command) -> Result<()> {
        let mut buffer = Vec::new();
        Man::new(cmd).render(&mut buffer)?;
        fs::write(path, buffer)?;
        println!("Generated: {}", path.display());
        Ok(())
    }

    println!("Man pages generated in {}", man_dir.display());
    Ok(())
}

/// Options of a command as an ASCII table, or `None` if it has none.
fn options_table(cmd: &Command) -> Option<String> {
    let rows: Vec<Vec<String>> = cmd
        .get_arguments()
        .filter(|arg| !is_builtin(arg))
        .map(|arg| {
            let flag = if arg.is_positional() {
                format!("<{}>", arg.get_id().as_str().to_uppercase())
            } else {
                let long = arg.get_long().map(|l| format!("--{}", l));
                let short = arg.get_short().map(|s| format!("-{}", s));
                match (long, short) {
                    (Some(l), Some(s)) => format!("{}, {}", s, l),
                    (Some(l), None) => l,
                    (None, Some(s)) => s,
                    (None, None) => arg.get_id().to_string(),
                }
            };
            let help = arg.get_help().map(|h| h.to_string()).unwrap_or_default();
            vec![flag, help]
        })
        .collect();

    if rows.is_empty() {
        None
    } else {
        Some(render_table(&rows, &["Argument", "Description"]))
    }
}

fn push_command_section(markdown: &mut String, title: &str, cmd: &Command) {
    markdown.push_str(&format!("## {}\n\n", title));

    if let Some(about) = cmd.get_about() {
        markdown.push_str(&format!("{}\n\n", about));
    }
    if let Some(table) = options_table(cmd) {
        markdown.push_str("```\n");
        markdown.push_str(&table);
        markdown.push_str("```\n\n");
    }
    if let Some(long_about) = cmd.get_long_about() {
        markdown.push_str("### Description\n\n");
        markdown.push_str("```\n");
        markdown.push_str(&format!("{}\n", long_about));
        markdown.push_str("```\n\n");
    }
    markdown.push_str("---\n\n");
}

/// Generate COMMANDS.md markdown documentation
fn generate_markdown(output: &Path) -> Result<()> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    let cmd = Cli::command();
    let mut markdown = String::new();

    markdown.push_str("# termkit Command Reference\n\n");
    markdown.push_str("This document is auto-generated from the CLI definitions.\n\n");
    markdown.push_str("## Table of Contents\n\n");
    for subcommand in visible_subcommands(&cmd) {
        let name = subcommand.get_name();
        markdown.push_str(&format!("- [{}](#termkit-{})\n", name, name));
    }
    markdown.push_str("\n---\n\n");

    push_command_section(&mut markdown, "termkit", &cmd);
    for subcommand in visible_subcommands(&cmd) {
        let name = subcommand.get_name();
        push_command_section(&mut markdown, &format!("termkit {}", name), subcommand);

        for nested in visible_subcommands(subcommand) {
            let title = format!("termkit {} {}", name, nested.get_name());
            push_command_section(&mut markdown, &title, nested);
        }
    }

    markdown.push_str("\n*Generated by `cargo xtask gen-docs`*\n");

    let output_path = output.join("COMMANDS.md");
    fs::write(&output_path, markdown)?;
    println!("Generated: {}", output_path.display());

    Ok(())
}
