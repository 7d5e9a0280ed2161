//! Reports produced by [`SyncEngine`](super::SyncEngine)

use autoimport_fs::{NormalizedPath, WriteOutcome};
use serde::{Deserialize, Serialize};

/// Report from a sync run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncReport {
    /// Whether the run left the filesystem untouched
    pub dry_run: bool,
    /// Human-readable actions taken (or that would be taken)
    pub actions: Vec<String>,
    /// Root-relative files written (or that would be written)
    pub changed: Vec<String>,
    /// Number of managed files already up to date
    pub unchanged: usize,
    /// Global export set, in generated order
    pub exports: Vec<String>,
    /// Recoverable per-file errors
    pub errors: Vec<String>,
}

impl SyncReport {
    pub(crate) fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    /// No file needed a write.
    pub fn is_clean(&self) -> bool {
        self.changed.is_empty()
    }

    /// No file failed.
    pub fn success(&self) -> bool {
        self.errors.is_empty()
    }

    pub(crate) fn record(&mut self, path: &NormalizedPath, outcome: WriteOutcome) {
        match outcome {
            WriteOutcome::Written => {
                self.actions.push(format!("Updated {}", path));
                self.changed.push(path.to_string());
            }
            WriteOutcome::WouldWrite => {
                self.actions.push(format!("[dry-run] Would update {}", path));
                self.changed.push(path.to_string());
            }
            WriteOutcome::Unchanged => self.unchanged += 1,
        }
    }

    pub(crate) fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }
}

/// Status of a check run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckStatus {
    /// Every managed file is up to date
    Healthy,
    /// At least one managed file would be rewritten
    Drifted,
}

/// A managed file that is out of date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriftItem {
    pub file: String,
    pub description: String,
}

/// Report from a check run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckReport {
    pub status: CheckStatus,
    pub drifted: Vec<DriftItem>,
    /// Errors met while computing the expected state
    pub messages: Vec<String>,
}

impl CheckReport {
    pub(crate) fn from_dry_run(report: SyncReport, output: Option<&str>) -> Self {
        let drifted: Vec<DriftItem> = report
            .changed
            .into_iter()
            .map(|file| {
                let description = if output == Some(file.as_str()) {
                    "Generated module is out of date".to_string()
                } else {
                    "Leading import is out of date".to_string()
                };
                DriftItem { file, description }
            })
            .collect();

        Self {
            status: if drifted.is_empty() {
                CheckStatus::Healthy
            } else {
                CheckStatus::Drifted
            },
            drifted,
            messages: report.errors,
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == CheckStatus::Healthy
    }
}
