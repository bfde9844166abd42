//! Git error types.

use thiserror::Error;

/// Git-related errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Not a git repository.
    #[error("not a git repository: {0}")]
    NotARepo(std::path::PathBuf),

    /// Tag not found.
    #[error("tag not found: {0}")]
    TagNotFound(String),

    /// Commit id that is not a valid object id.
    #[error("invalid commit id: {0}")]
    InvalidCommitId(String),

    /// Submodule could not be opened.
    #[error("cannot open submodule {name}: {source}")]
    Submodule {
        name: String,
        #[source]
        source: git2::Error,
    },

    /// Git2 error.
    #[error("git error: {0}")]
    Git2(#[from] git2::Error),
}

/// Result type for git operations.
pub type GitResult<T> = Result<T, GitError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_not_a_repo_display() {
        let err = GitError::NotARepo(PathBuf::from("/tmp/not-git"));
        assert_eq!(err.to_string(), "not a git repository: /tmp/not-git");
    }

    #[test]
    fn test_tag_not_found_display() {
        let err = GitError::TagNotFound("v1.0.0".to_string());
        assert_eq!(err.to_string(), "tag not found: v1.0.0");
    }

    #[test]
    fn test_invalid_commit_id_display() {
        let err = GitError::InvalidCommitId("xyz".to_string());
        assert_eq!(err.to_string(), "invalid commit id: xyz");
    }

    #[test]
    fn test_submodule_display() {
        let err = GitError::Submodule {
            name: "libs/core".to_string(),
            source: git2::Error::from_str("not initialized"),
        };
        assert_eq!(
            err.to_string(),
            "cannot open submodule libs/core: not initialized"
        );
    }

    #[test]
    fn test_git2_error_conversion() {
        let err: GitError = git2::Error::from_str("boom").into();
        assert!(matches!(err, GitError::Git2(_)));
        assert_eq!(err.to_string(), "git error: boom");
    }
}
