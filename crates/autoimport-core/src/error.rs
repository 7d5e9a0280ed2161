//! Error types for autoimport-core

use std::path::PathBuf;

use crate::extract::ParseError;

/// Result type for autoimport-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in autoimport-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No configuration file in the project root
    #[error("No autoimport configuration found in {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration loaded but unusable
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Exclude pattern that is not a valid regular expression
    #[error("Invalid exclude pattern {pattern:?}: {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Source text the parser could not turn into declarations
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Filesystem error from autoimport-fs
    #[error(transparent)]
    Fs(#[from] autoimport_fs::Error),
}
