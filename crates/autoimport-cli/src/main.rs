//! autoimport CLI
//!
//! Runs the import synchronization engine as a build step.

mod cli;
mod commands;
mod error;

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::Context;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };
    let context = Context::new(root, cli.config);

    match cli.command {
        Some(cmd) => execute_command(&context, cmd),
        None => {
            println!(
                "{} Keep generated imports in sync",
                "autoimport".green().bold()
            );
            println!();
            println!("Run {} for available commands.", "autoimport --help".cyan());
            Ok(())
        }
    }
}

/// Log to stderr; `RUST_LOG` wins unless `--verbose` is given.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!("Verbose mode enabled");
}

fn execute_command(context: &Context, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Sync { dry_run, json } => commands::run_sync(context, dry_run, json),
        Commands::Check { json } => commands::run_check(context, json),
        Commands::Exports { file } => cmd_exports(context, file),
        Commands::Init { force } => commands::run_init(context, force),
        Commands::Completions { shell } => {
            commands::run_completions(shell);
            Ok(())
        }
    }
}

fn cmd_exports(context: &Context, file: PathBuf) -> Result<()> {
    let file = if file.is_relative() {
        std::env::current_dir()?.join(file)
    } else {
        file
    };
    commands::run_exports(context, &file)
}
