//! Filesystem layer for autoimport
//!
//! Provides normalized, deterministically ordered paths, recursive file
//! collection under configured roots, and write-only-on-change I/O.

pub mod collect;
pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use collect::{AcceptAll, Collection, Collector, PathFilter};
pub use config::{ConfigFormat, ConfigStore};
pub use error::{Error, Result};
pub use io::WriteOutcome;
pub use path::{NormalizedPath, compare_segments, normalize};
