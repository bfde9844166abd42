//! Git repository backed by libgit2.

use std::collections::BTreeSet;
use std::path::Path;

use chrono::{TimeZone, Utc};
use git2::{
    DiffFindOptions, DiffOptions, ErrorCode, ObjectType, Oid, Repository as Git2Repo, Sort,
    TreeWalkMode, TreeWalkResult,
};
use relnotes_commit::RawCommit;
use tracing::debug;

use crate::{CommitId, GitAccess, GitError, GitResult, Submodule};

/// A repository on the local filesystem.
pub struct LocalRepository {
    inner: Git2Repo,
}

impl LocalRepository {
    /// Opens a repository at the given path.
    ///
    /// The path is the working directory; its `.git` directory is resolved
    /// from there.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not a valid Git repository.
    pub fn open(path: impl AsRef<Path>) -> GitResult<Self> {
        let path = path.as_ref();
        let inner = Git2Repo::open(path).map_err(|_| GitError::NotARepo(path.to_path_buf()))?;
        Ok(Self { inner })
    }

    /// Returns the repository root path.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.inner.workdir().unwrap_or_else(|| self.inner.path())
    }

    fn oid(id: &CommitId) -> GitResult<Oid> {
        Oid::from_str(id.as_str()).map_err(|_| GitError::InvalidCommitId(id.to_string()))
    }

    fn collect_walk(revwalk: git2::Revwalk<'_>) -> GitResult<Vec<CommitId>> {
        revwalk
            .map(|oid| oid.map(CommitId::from).map_err(GitError::from))
            .collect()
    }

    fn tree_paths(tree: &git2::Tree<'_>) -> GitResult<BTreeSet<String>> {
        let mut paths = BTreeSet::new();
        tree.walk(TreeWalkMode::PreOrder, |root, entry| {
            if entry.kind() != Some(ObjectType::Tree) {
                paths.insert(format!(
                    "{root}{}",
                    String::from_utf8_lossy(entry.name_bytes())
                ));
            }
            TreeWalkResult::Ok
        })?;
        Ok(paths)
    }
}

impl GitAccess for LocalRepository {
    fn name(&self) -> String {
        let path = self.path();
        path.file_name().map_or_else(
            || path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
    }

    fn head(&self) -> GitResult<Option<CommitId>> {
        match self.inner.head().and_then(|head| head.peel_to_commit()) {
            Ok(commit) => Ok(Some(commit.id().into())),
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
                debug!(path = %self.path().display(), "HEAD does not resolve to a commit");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn tags(&self) -> GitResult<Vec<String>> {
        let tags = self.inner.tag_names(None)?;
        Ok(tags.iter().flatten().map(String::from).collect())
    }

    fn peel_tag(&self, name: &str) -> GitResult<CommitId> {
        let reference = self
            .inner
            .find_reference(&format!("refs/tags/{name}"))
            .map_err(|_| GitError::TagNotFound(name.to_string()))?;
        let commit = reference.peel_to_commit()?;
        Ok(commit.id().into())
    }

    fn log_range(&self, from: &CommitId, to: &CommitId) -> GitResult<Vec<CommitId>> {
        let mut revwalk = self.inner.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(Self::oid(to)?)?;
        revwalk.hide(Self::oid(from)?)?;
        Self::collect_walk(revwalk)
    }

    fn log_all(&self) -> GitResult<Vec<CommitId>> {
        let mut revwalk = self.inner.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push_glob("*")?;
        // A detached HEAD is not covered by any reference.
        if self.inner.head_detached().unwrap_or(false) {
            revwalk.push_head()?;
        }
        Self::collect_walk(revwalk)
    }

    fn commit(&self, id: &CommitId) -> GitResult<RawCommit> {
        let commit = self.inner.find_commit(Self::oid(id)?)?;
        let author = commit.author();
        let time = commit.time();

        Ok(RawCommit::new(
            id.as_str(),
            String::from_utf8_lossy(commit.message_bytes()),
            author.name().unwrap_or("Unknown"),
            Utc.timestamp_opt(time.seconds(), 0)
                .single()
                .unwrap_or_else(Utc::now),
        ))
    }

    fn changed_paths(&self, id: &CommitId) -> GitResult<BTreeSet<String>> {
        let commit = self.inner.find_commit(Self::oid(id)?)?;
        let tree = commit.tree()?;

        if commit.parent_count() == 0 {
            return Self::tree_paths(&tree);
        }

        let parent_tree = commit.parent(0)?.tree()?;
        let mut opts = DiffOptions::new();
        let mut diff =
            self.inner
                .diff_tree_to_tree(Some(&parent_tree), Some(&tree), Some(&mut opts))?;

        let mut find = DiffFindOptions::new();
        find.renames(true);
        diff.find_similar(Some(&mut find))?;

        Ok(diff
            .deltas()
            .filter_map(|delta| delta.new_file().path().map(|p| p.to_string_lossy().into_owned()))
            .collect())
    }

    fn submodules(&self) -> GitResult<Vec<Submodule<Self>>> {
        let submodules = self.inner.submodules()?;

        Ok(submodules
            .iter()
            .map(|submodule| {
                let name = String::from_utf8_lossy(submodule.name_bytes()).into_owned();
                let repository = submodule
                    .open()
                    .map(|inner| Self { inner })
                    .map_err(|source| GitError::Submodule {
                        name: name.clone(),
                        source,
                    });
                Submodule { name, repository }
            })
            .collect())
    }
}
