//! Capability interface over a Git repository.

use std::collections::BTreeSet;
use std::fmt;

use relnotes_commit::RawCommit;

use crate::GitResult;

/// Hex object id of a commit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommitId(String);

impl CommitId {
    /// Wraps a hex object id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<git2::Oid> for CommitId {
    fn from(oid: git2::Oid) -> Self {
        Self(oid.to_string())
    }
}

/// A submodule of a repository.
///
/// Opening can fail independently per submodule (for example when it was never
/// initialized), so the outcome is kept next to the name.
#[derive(Debug)]
pub struct Submodule<R> {
    /// The submodule name as configured in `.gitmodules`.
    pub name: String,

    /// The opened submodule repository.
    pub repository: GitResult<R>,
}

/// Read-only operations the report pipeline needs from a repository.
pub trait GitAccess: Sized {
    /// Display name of the repository.
    fn name(&self) -> String;

    /// Resolves `HEAD` to a commit, `None` when it cannot be resolved.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be read.
    fn head(&self) -> GitResult<Option<CommitId>>;

    /// Lists tag names in the library's listing order.
    ///
    /// # Errors
    ///
    /// Returns an error if tags cannot be read.
    fn tags(&self) -> GitResult<Vec<String>>;

    /// Resolves a tag, lightweight or annotated, to the commit it designates.
    ///
    /// # Errors
    ///
    /// Returns an error if the tag does not exist or does not lead to a commit.
    fn peel_tag(&self, name: &str) -> GitResult<CommitId>;

    /// Commits reachable from `to` but not from `from`, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the commit graph cannot be walked.
    fn log_range(&self, from: &CommitId, to: &CommitId) -> GitResult<Vec<CommitId>>;

    /// Commits reachable from any reference, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the commit graph cannot be walked.
    fn log_all(&self) -> GitResult<Vec<CommitId>>;

    /// Reads the author, time and message of a commit.
    ///
    /// # Errors
    ///
    /// Returns an error if the commit cannot be read.
    fn commit(&self, id: &CommitId) -> GitResult<RawCommit>;

    /// Paths touched by a commit relative to its first parent.
    ///
    /// For a root commit every file of its tree is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the commit, its tree or its parent cannot be read.
    fn changed_paths(&self, id: &CommitId) -> GitResult<BTreeSet<String>>;

    /// Lists submodules in enumeration order.
    ///
    /// # Errors
    ///
    /// Returns an error if the submodule configuration cannot be read.
    fn submodules(&self) -> GitResult<Vec<Submodule<Self>>>;
}
