//! Commit collection for a selected range.

use relnotes_commit::{CommitCollection, CommitRecord};
use relnotes_git::GitAccess;
use tracing::debug;

use crate::{CommitRange, CoreError, CoreResult};

/// Reads every commit of `range` into a collection labelled `label`.
///
/// Records keep the order of the range walk.
///
/// # Errors
///
/// Returns [`CoreError::CommitRead`] as soon as one commit, its tree or its
/// parent cannot be read, and [`CoreError::Git`] if the range walk fails.
pub fn collect_commits<G: GitAccess>(
    git: &G,
    range: &CommitRange,
    label: impl Into<String>,
) -> CoreResult<CommitCollection> {
    let mut collection = CommitCollection::new(label);

    for id in range.commits(git)? {
        let read_error = |source| CoreError::CommitRead {
            hash: id.to_string(),
            source,
        };
        let raw = git.commit(&id).map_err(read_error)?;
        let paths = git.changed_paths(&id).map_err(read_error)?;

        debug!(
            hash = %raw.short_hash(),
            subject = %raw.subject(),
            files = paths.len(),
            "collected commit"
        );
        collection.push(CommitRecord::from_raw(raw, paths));
    }

    Ok(collection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockRepo;
    use relnotes_git::CommitId;

    fn range() -> CommitRange {
        CommitRange::Since {
            tag: "v1.0".to_string(),
            from: CommitId::new("c1"),
            to: CommitId::new("c3"),
        }
    }

    #[test]
    fn test_collect_in_walk_order() {
        let repo = MockRepo::new("repo")
            .commit("c1", "initial", &["README.md"], 100)
            .commit("c2", "touch a", &["moduleA/x.txt"], 200)
            .commit("c3", "touch b", &["moduleB/y.txt"], 300);

        let collection = collect_commits(&repo, &range(), "repo").unwrap();

        assert_eq!(collection.label(), "repo");
        let hashes: Vec<&str> = collection.into_iter().map(CommitRecord::hash).collect();
        assert_eq!(hashes, vec!["c3", "c2"]);
        assert!(collection.records()[0].touches("moduleB"));
        assert!(collection.records()[1].touches("moduleA"));
    }

    #[test]
    fn test_collect_normalizes_messages() {
        let repo = MockRepo::new("repo")
            .commit("c1", "initial", &["README.md"], 100)
            .commit("c2", "subject\nbody line\n", &["a/x"], 200)
            .commit("c3", "plain", &["a/x"], 300);

        let collection = collect_commits(&repo, &range(), "repo").unwrap();
        assert_eq!(collection.records()[1].message(), "subject body line");
    }

    #[test]
    fn test_collect_empty_range() {
        let repo = MockRepo::new("repo").commit("c1", "initial", &["README.md"], 100);
        let range = CommitRange::Since {
            tag: "v1.0".to_string(),
            from: CommitId::new("c1"),
            to: CommitId::new("c1"),
        };

        let collection = collect_commits(&repo, &range, "repo").unwrap();
        assert!(collection.is_empty());
    }

    #[test]
    fn test_collect_unreadable_commit_fails() {
        let repo = MockRepo::new("repo")
            .commit("c1", "initial", &["README.md"], 100)
            .broken_commit("c2", 200)
            .commit("c3", "fine", &["a/x"], 300);

        let result = collect_commits(&repo, &range(), "repo");
        assert!(matches!(result, Err(CoreError::CommitRead { ref hash, .. }) if hash == "c2"));
    }
}
