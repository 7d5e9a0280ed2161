//! Exports command implementation

use std::path::Path;

use autoimport_core::SyncEngine;
use autoimport_fs::NormalizedPath;
use tracing::debug;

use super::Context;
use crate::error::Result;

/// Print the identifiers `file` exports, one per line.
///
/// Uses the project configuration when there is one, defaults otherwise.
pub fn run_exports(context: &Context, file: &Path) -> Result<()> {
    let engine = match context.engine() {
        Ok(engine) => engine,
        Err(e) => {
            debug!(error = %e, "No usable configuration, using defaults");
            SyncEngine::new(context.root.clone(), Default::default())?
        }
    };

    for name in engine.exports_of(&NormalizedPath::new(file))? {
        println!("{}", name);
    }
    Ok(())
}
