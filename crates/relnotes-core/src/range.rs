//! Commit range selection.

use chrono::{DateTime, Utc};
use relnotes_config::TagPolicy;
use relnotes_git::{CommitId, GitAccess, GitResult};
use semver::Version;
use tracing::{debug, warn};

use crate::{CoreError, CoreResult};

/// The commits a report section covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitRange {
    /// Every commit reachable from any reference.
    All,

    /// Commits reachable from `to` but not from the tagged commit `from`.
    Since {
        tag: String,
        from: CommitId,
        to: CommitId,
    },
}

impl CommitRange {
    /// Walks the range, newest commit first.
    ///
    /// # Errors
    ///
    /// Returns an error if the commit graph cannot be walked.
    pub fn commits<G: GitAccess>(&self, git: &G) -> GitResult<Vec<CommitId>> {
        match self {
            Self::All => git.log_all(),
            Self::Since { from, to, .. } => git.log_range(from, to),
        }
    }
}

/// Decides which commits belong in a repository's section.
#[derive(Debug, Clone)]
pub struct RangeSelector {
    all_commits: bool,
    policy: TagPolicy,
    tag_prefix: String,
}

impl RangeSelector {
    /// Creates a selector.
    #[must_use]
    pub fn new(all_commits: bool, policy: TagPolicy, tag_prefix: impl Into<String>) -> Self {
        Self {
            all_commits,
            policy,
            tag_prefix: tag_prefix.into(),
        }
    }

    /// Selects the range for the given repository.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidRange`] when there is no tag to start from
    /// or `HEAD` does not resolve, and [`CoreError::Git`] when the repository
    /// cannot be read.
    pub fn select<G: GitAccess>(&self, git: &G) -> CoreResult<CommitRange> {
        if self.all_commits {
            return Ok(CommitRange::All);
        }

        let tags = git.tags()?;
        let Some((tag, from)) = self.last_tag(git, &tags)? else {
            return Err(CoreError::InvalidRange(if tags.is_empty() {
                "repository has no tags".to_string()
            } else {
                format!("no tag matches the {:?} policy", self.policy)
            }));
        };

        let Some(to) = git.head()? else {
            return Err(CoreError::InvalidRange("HEAD does not resolve".to_string()));
        };

        debug!(%tag, %from, %to, "selected commit range");
        Ok(CommitRange::Since { tag, from, to })
    }

    fn last_tag<G: GitAccess>(
        &self,
        git: &G,
        tags: &[String],
    ) -> CoreResult<Option<(String, CommitId)>> {
        match self.policy {
            TagPolicy::Listing => match tags.last() {
                Some(tag) => Ok(Some((tag.clone(), git.peel_tag(tag)?))),
                None => Ok(None),
            },
            TagPolicy::CommitTime => {
                let mut latest: Option<(String, CommitId, DateTime<Utc>)> = None;
                for tag in tags {
                    let id = match git.peel_tag(tag) {
                        Ok(id) => id,
                        Err(e) => {
                            warn!(%tag, error = %e, "ignoring tag that does not lead to a commit");
                            continue;
                        }
                    };
                    let date = git.commit(&id)?.date;
                    // Later listing entries win ties.
                    if latest.as_ref().is_none_or(|(_, _, best)| date >= *best) {
                        latest = Some((tag.clone(), id, date));
                    }
                }
                Ok(latest.map(|(tag, id, _)| (tag, id)))
            }
            TagPolicy::Semver => {
                let highest = tags
                    .iter()
                    .filter_map(|tag| {
                        let version = tag.strip_prefix(self.tag_prefix.as_str())?;
                        Version::parse(version).ok().map(|v| (tag, v))
                    })
                    .max_by(|a, b| a.1.cmp(&b.1));
                match highest {
                    Some((tag, _)) => Ok(Some((tag.clone(), git.peel_tag(tag)?))),
                    None => Ok(None),
                }
            }
        }
    }
}
