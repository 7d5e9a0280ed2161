//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// autoimport - Keep generated imports in sync with the exports on disk
#[derive(Parser, Debug)]
#[command(name = "autoimport")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Configuration file (defaults to autoimport.toml/.json/.yaml in the root)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Regenerate the import module and rewrite consumer imports
    Sync {
        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,

        /// Output the report as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Report out-of-date files; exits with status 1 if any
    Check {
        /// Output the report as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the identifiers a file exports
    Exports {
        /// File to inspect
        file: PathBuf,
    },

    /// Write a starter autoimport.toml
    Init {
        /// Overwrite an existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completions
    ///
    /// Examples:
    ///   autoimport completions bash > ~/.local/share/bash-completion/completions/autoimport
    ///   autoimport completions zsh > ~/.zfunc/_autoimport
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
