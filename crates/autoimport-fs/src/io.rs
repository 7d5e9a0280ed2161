//! Atomic I/O operations with file locking

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use fs2::FileExt;
use tracing::debug;

use crate::{Error, NormalizedPath, Result};

/// Outcome of [`write_if_changed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file was (re)written.
    Written,
    /// Existing content is equivalent; nothing was written.
    Unchanged,
    /// Dry run: the file would have been written.
    WouldWrite,
}

impl WriteOutcome {
    /// Whether the file differs (or differed) from the new content.
    pub fn is_change(self) -> bool {
        !matches!(self, WriteOutcome::Unchanged)
    }
}

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename strategy to prevent partial writes.
/// Acquires an advisory lock to prevent concurrent access.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native_path = path.to_native();

    if let Some(parent) = native_path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    // Same directory keeps the rename on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        native_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = native_path.with_file_name(&temp_name);

    let result = write_and_rename(&temp_path, &native_path, content);
    if result.is_err() {
        if let Err(e) = fs::remove_file(&temp_path) {
            debug!(path = %temp_path.display(), error = %e, "Could not remove temp file");
        }
    }
    result
}

fn write_and_rename(temp_path: &Path, native_path: &Path, content: &[u8]) -> Result<()> {
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)
        .map_err(|e| Error::io(temp_path, e))?;

    temp_file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: native_path.to_path_buf(),
    })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(temp_path, e))?;

    temp_file
        .sync_all()
        .map_err(|e| Error::io(temp_path, e))?;

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: native_path.to_path_buf(),
    })?;

    fs::rename(temp_path, native_path).map_err(|e| Error::io(native_path, e))
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Read text content, treating a missing or unreadable file as empty.
///
/// A file that does not exist yet is the normal first-run state.
pub fn read_text_or_empty(path: &NormalizedPath) -> String {
    match read_text(path) {
        Ok(content) => content,
        Err(e) => {
            debug!(path = %path, error = %e, "Treating unreadable file as empty");
            String::new()
        }
    }
}

/// Write text content to a file atomically.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

/// Equivalence used by the generated module: equal after trimming.
pub fn trimmed_eq(old: &str, new: &str) -> bool {
    old.trim() == new.trim()
}

/// Write `content` only when `unchanged(existing, content)` is false.
///
/// Existing content that cannot be read counts as empty. With `dry_run` the
/// comparison still happens but nothing touches the disk. Skipping equivalent
/// writes keeps file watchers from looping and version control quiet.
pub fn write_if_changed<F>(
    path: &NormalizedPath,
    content: &str,
    unchanged: F,
    dry_run: bool,
) -> Result<WriteOutcome>
where
    F: Fn(&str, &str) -> bool,
{
    let existing = read_text_or_empty(path);
    if unchanged(&existing, content) {
        debug!(path = %path, "Content unchanged, skipping write");
        return Ok(WriteOutcome::Unchanged);
    }
    if dry_run {
        return Ok(WriteOutcome::WouldWrite);
    }

    write_text(path, content)?;
    debug!(path = %path, bytes = content.len(), "Wrote file");
    Ok(WriteOutcome::Written)
}
