//! In-memory repository for unit tests.

use std::collections::BTreeSet;
use std::path::PathBuf;

use chrono::{TimeZone, Utc};
use relnotes_commit::RawCommit;
use relnotes_git::{CommitId, GitAccess, GitError, GitResult, Submodule};

#[derive(Debug, Clone)]
pub struct MockCommit {
    pub raw: RawCommit,
    pub paths: Option<Vec<String>>,
}

/// Linear history, newest commit first.
#[derive(Debug, Clone, Default)]
pub struct MockRepo {
    pub name: String,
    pub head: Option<CommitId>,
    pub tags: Vec<(String, CommitId)>,
    pub commits: Vec<MockCommit>,
    pub submodules: Vec<(String, Option<MockRepo>)>,
    pub submodules_unreadable: bool,
}

impl MockRepo {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Adds a commit on top of the history and moves `HEAD` to it.
    pub fn commit(mut self, hash: &str, message: &str, paths: &[&str], time: i64) -> Self {
        let date = Utc.timestamp_opt(time, 0).single().unwrap();
        self.commits.insert(
            0,
            MockCommit {
                raw: RawCommit::new(hash, message, "Test Author", date),
                paths: Some(paths.iter().map(ToString::to_string).collect()),
            },
        );
        self.head = Some(CommitId::new(hash));
        self
    }

    /// Adds a commit whose changed paths cannot be read.
    pub fn broken_commit(mut self, hash: &str, time: i64) -> Self {
        self = self.commit(hash, "broken", &[], time);
        self.commits[0].paths = None;
        self
    }

    pub fn tag(mut self, name: &str, hash: &str) -> Self {
        self.tags.push((name.to_string(), CommitId::new(hash)));
        self
    }

    pub fn submodule(mut self, name: &str, repo: Option<MockRepo>) -> Self {
        self.submodules.push((name.to_string(), repo));
        self
    }

    /// Makes the submodule listing itself fail.
    pub fn unreadable_submodules(mut self) -> Self {
        self.submodules_unreadable = true;
        self
    }

    fn find(&self, id: &CommitId) -> GitResult<&MockCommit> {
        self.commits
            .iter()
            .find(|c| c.raw.hash == id.as_str())
            .ok_or_else(|| GitError::InvalidCommitId(id.to_string()))
    }
}

impl GitAccess for MockRepo {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn head(&self) -> GitResult<Option<CommitId>> {
        Ok(self.head.clone())
    }

    fn tags(&self) -> GitResult<Vec<String>> {
        Ok(self.tags.iter().map(|(name, _)| name.clone()).collect())
    }

    fn peel_tag(&self, name: &str) -> GitResult<CommitId> {
        self.tags
            .iter()
            .find(|(tag, _)| tag == name)
            .map(|(_, id)| id.clone())
            .ok_or_else(|| GitError::TagNotFound(name.to_string()))
    }

    fn log_range(&self, from: &CommitId, to: &CommitId) -> GitResult<Vec<CommitId>> {
        Ok(self
            .commits
            .iter()
            .map(|c| CommitId::new(&c.raw.hash))
            .skip_while(|id| id != to)
            .take_while(|id| id != from)
            .collect())
    }

    fn log_all(&self) -> GitResult<Vec<CommitId>> {
        Ok(self
            .commits
            .iter()
            .map(|c| CommitId::new(&c.raw.hash))
            .collect())
    }

    fn commit(&self, id: &CommitId) -> GitResult<RawCommit> {
        Ok(self.find(id)?.raw.clone())
    }

    fn changed_paths(&self, id: &CommitId) -> GitResult<BTreeSet<String>> {
        self.find(id)?
            .paths
            .as_ref()
            .map(|paths| paths.iter().cloned().collect())
            .ok_or_else(|| GitError::InvalidCommitId(id.to_string()))
    }

    fn submodules(&self) -> GitResult<Vec<Submodule<Self>>> {
        if self.submodules_unreadable {
            return Err(GitError::Git2(git2::Error::from_str("invalid .gitmodules")));
        }
        Ok(self
            .submodules
            .iter()
            .map(|(name, repo)| Submodule {
                name: name.clone(),
                repository: repo
                    .clone()
                    .ok_or_else(|| GitError::NotARepo(PathBuf::from(name))),
            })
            .collect())
    }
}
