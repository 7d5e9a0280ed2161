//! Init command implementation

use colored::Colorize;

use autoimport_core::{CONFIG_FILE_NAMES, SyncConfig};
use autoimport_fs::ConfigStore;

use super::Context;
use crate::error::{CliError, Result};

/// Write a starter `autoimport.toml` into the project root.
pub fn run_init(context: &Context, force: bool) -> Result<()> {
    let existing = ConfigStore::new().locate(&context.root, &CONFIG_FILE_NAMES);
    if let Some(existing) = existing
        && !force
    {
        return Err(CliError::user(format!(
            "{} already exists (use --force to overwrite)",
            existing
        )));
    }

    let path = context.root.join(CONFIG_FILE_NAMES[0]);
    ConfigStore::new().save(&path, &SyncConfig::starter())?;

    println!("{} Created {}", "OK".green().bold(), path.as_str().cyan());
    println!("Edit the import and modify roots, then run {}.", "autoimport sync".cyan());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoimport_core::load_config;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_loadable_config() {
        let temp = TempDir::new().unwrap();
        let context = Context::new(temp.path().to_path_buf(), None);

        run_init(&context, false).unwrap();

        let config = load_config(&context.root).unwrap();
        assert_eq!(config, SyncConfig::starter());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("autoimport.json"), "{}").unwrap();
        let context = Context::new(temp.path().to_path_buf(), None);

        assert!(matches!(run_init(&context, false), Err(CliError::User { .. })));
        run_init(&context, true).unwrap();
    }
}
