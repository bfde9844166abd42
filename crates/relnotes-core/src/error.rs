//! Core error types.

use std::path::PathBuf;

use thiserror::Error;

/// Core-related errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No tag to start from, or `HEAD` does not resolve.
    #[error("no valid commit range: {0}")]
    InvalidRange(String),

    /// A commit in range could not be read.
    #[error("cannot read commit {hash}: {source}")]
    CommitRead {
        hash: String,
        #[source]
        source: relnotes_git::GitError,
    },

    /// Report options that cannot produce a report.
    #[error(transparent)]
    Options(#[from] relnotes_config::ConfigError),

    /// Git error.
    #[error("git error: {0}")]
    Git(#[from] relnotes_git::GitError),

    /// The report could not be written.
    #[error("cannot write report to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CoreError {
    /// Returns true for the range errors that only skip a section.
    pub fn is_invalid_range(&self) -> bool {
        matches!(self, Self::InvalidRange(_))
    }
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
