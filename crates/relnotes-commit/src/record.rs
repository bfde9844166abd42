//! Commit record with changed paths and derived modules.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use crate::RawCommit;

/// A commit ready to be rendered in a report.
///
/// The module set is always derived from the changed paths, so the two can
/// never disagree. Both sets are ordered, which keeps rendering deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    hash: String,
    message: String,
    author: String,
    timestamp: DateTime<Utc>,
    changed_paths: BTreeSet<String>,
    modules: BTreeSet<String>,
}

impl CommitRecord {
    /// Creates a record, normalizing the message and deriving the modules.
    #[must_use]
    pub fn new(
        hash: impl Into<String>,
        message: &str,
        author: impl Into<String>,
        timestamp: DateTime<Utc>,
        changed_paths: impl IntoIterator<Item = String>,
    ) -> Self {
        let changed_paths: BTreeSet<String> = changed_paths.into_iter().collect();
        let modules = changed_paths
            .iter()
            .map(|path| module_of(path).to_string())
            .collect();

        Self {
            hash: hash.into(),
            message: normalize_message(message),
            author: author.into(),
            timestamp,
            changed_paths,
            modules,
        }
    }

    /// Builds a record from a raw commit and the paths it touched.
    #[must_use]
    pub fn from_raw(raw: RawCommit, changed_paths: impl IntoIterator<Item = String>) -> Self {
        Self::new(raw.hash, &raw.message, raw.author, raw.date, changed_paths)
    }

    /// The commit hash.
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// The message, on a single line.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The author name.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// The commit time.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Repository-relative paths touched by the commit.
    pub fn changed_paths(&self) -> &BTreeSet<String> {
        &self.changed_paths
    }

    /// First path segments of the changed paths.
    pub fn modules(&self) -> &BTreeSet<String> {
        &self.modules
    }

    /// Returns true if any changed path lives under `module`.
    pub fn touches(&self, module: &str) -> bool {
        self.modules.contains(module)
    }
}

/// Returns the module of a repository-relative path: its first segment.
///
/// A path without `/` is its own module.
pub fn module_of(path: &str) -> &str {
    path.split_once('/').map_or(path, |(head, _)| head)
}

/// Flattens a commit message onto one line.
///
/// Trailing newlines are dropped, every remaining `\n` becomes a single space.
pub fn normalize_message(message: &str) -> String {
    message.trim_end_matches('\n').replace('\n', " ")
}
