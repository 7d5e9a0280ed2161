//! SyncEngine for keeping the generated module and its consumers up to date
//!
//! This module provides:
//! - **sync**: regenerate the module and rewrite consumer imports
//! - **check**: the same computation as a dry run, reported as drift

mod engine;
mod report;

pub use engine::{Comparison, SyncEngine, SyncOptions};
pub use report::{CheckReport, CheckStatus, DriftItem, SyncReport};
