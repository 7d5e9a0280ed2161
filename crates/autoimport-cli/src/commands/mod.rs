//! Command implementations for autoimport-cli

pub mod completions;
pub mod exports;
pub mod init;
pub mod sync;

use std::path::PathBuf;

use autoimport_core::{SyncConfig, SyncEngine, load_config};
use autoimport_fs::{ConfigStore, NormalizedPath};

use crate::error::Result;

pub use completions::run_completions;
pub use exports::run_exports;
pub use init::run_init;
pub use sync::{run_check, run_sync};

/// Project root and configuration location shared by every command
#[derive(Debug, Clone)]
pub struct Context {
    pub root: NormalizedPath,
    config: Option<NormalizedPath>,
}

impl Context {
    pub fn new(root: PathBuf, config: Option<PathBuf>) -> Self {
        Self {
            root: NormalizedPath::new(root),
            config: config.map(NormalizedPath::new),
        }
    }

    /// Load the configuration from `--config` or the project root.
    pub fn load_config(&self) -> Result<SyncConfig> {
        match &self.config {
            Some(path) => {
                let config: SyncConfig = ConfigStore::new().load(path)?;
                config.validate()?;
                Ok(config)
            }
            None => Ok(load_config(&self.root)?),
        }
    }

    pub fn engine(&self) -> Result<SyncEngine> {
        Ok(SyncEngine::new(self.root.clone(), self.load_config()?)?)
    }
}
