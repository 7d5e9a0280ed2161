//! Sync and check command implementations

use colored::Colorize;

use autoimport_core::{CheckStatus, SyncOptions};

use super::Context;
use crate::error::{CliError, Result};

/// Run the sync command
///
/// Regenerates the import module and rewrites consumer imports.
pub fn run_sync(context: &Context, dry_run: bool, json: bool) -> Result<()> {
    let engine = context.engine()?;

    if !json {
        let verb = if dry_run { "Previewing" } else { "Synchronizing" };
        println!("{} {} imports in {}...", "=>".blue().bold(), verb, engine.root());
    }

    let report = engine.sync_with_options(&SyncOptions { dry_run });

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if report.actions.is_empty() {
        println!("{} Already synchronized. No changes needed.", "OK".green().bold());
    } else {
        println!("{} Synchronization complete:", "OK".green().bold());
        for action in &report.actions {
            println!("   {} {}", "+".green(), action);
        }
    }

    if !report.errors.is_empty() {
        println!();
        println!("{} Some files were skipped:", "WARN".yellow().bold());
        for error in &report.errors {
            println!("   {} {}", "!".yellow(), error);
        }
    }

    Ok(())
}

/// Run the check command
///
/// Fails when any managed file would be rewritten by a sync.
pub fn run_check(context: &Context, json: bool) -> Result<()> {
    let engine = context.engine()?;
    let report = engine.check();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        match report.status {
            CheckStatus::Healthy => {
                println!("{} All imports are up to date.", "OK".green().bold());
            }
            CheckStatus::Drifted => {
                println!("{} Imports are out of date:", "DRIFTED".red().bold());
                for item in &report.drifted {
                    println!("   {} {}: {}", "!".red(), item.file.cyan(), item.description);
                }
                println!();
                println!("Run {} to update them.", "autoimport sync".cyan());
            }
        }
        for message in &report.messages {
            println!("   {} {}", "?".yellow(), message.dimmed());
        }
    }

    if report.is_healthy() {
        Ok(())
    } else {
        Err(CliError::user(format!(
            "{} file(s) out of date",
            report.drifted.len()
        )))
    }
}
