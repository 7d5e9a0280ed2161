//! Synchronization engine for autoimport
//!
//! This crate sits above `autoimport-fs` and `autoimport-blocks` and
//! implements:
//!
//! - **Configuration**: `autoimport.toml` (or JSON/YAML) types and loading
//! - **Classification**: script, include and custom files by suffix
//! - **Extraction**: named exports through an injected [`DeclarationParser`],
//!   with a tree-sitter implementation for JavaScript and TypeScript
//! - **Aggregation**: the generated module, built as a fold
//! - **Rewriting**: the leading import of every consumer file
//! - **SyncEngine**: sync and check runs with per-file error accounting
//!
//! # Architecture
//!
//! ```text
//!            autoimport-cli
//!                  |
//!            autoimport-core
//!                  |
//!     +------------+-------------+
//!     |                          |
//! autoimport-fs          autoimport-blocks
//! ```
//!
//! # Example
//!
//! ```no_run
//! use autoimport_core::{SyncEngine, SyncOptions};
//! use autoimport_fs::NormalizedPath;
//!
//! fn run() -> autoimport_core::Result<()> {
//!     let engine = SyncEngine::load(NormalizedPath::new("."))?;
//!     let report = engine.sync_with_options(&SyncOptions { dry_run: true });
//!     for action in &report.actions {
//!         println!("{action}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod aggregate;
pub mod config;
pub mod custom;
pub mod error;
pub mod extract;
pub mod filter;
pub mod kind;
pub mod rewrite;
pub mod sync;

pub use aggregate::Aggregate;
pub use config::{
    CONFIG_FILE_NAMES, CustomRule, DEFAULT_OUTPUT, Dialect, ExtensionConfig, ParserConfig,
    SyncConfig, load_config,
};
pub use custom::{CustomHandler, CustomOutput, NoCustomHandler, TemplateHandler};
pub use error::{Error, Result};
pub use extract::{Declaration, DeclarationParser, Extractor, ParseError, SourceState, TreeSitterParser};
pub use filter::ExcludeFilter;
pub use kind::FileKind;
pub use rewrite::{ConsumerRewrite, Rewriter};
pub use sync::{CheckReport, CheckStatus, Comparison, DriftItem, SyncEngine, SyncOptions, SyncReport};
