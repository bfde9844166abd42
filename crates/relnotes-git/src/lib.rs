//! Git access layer for relnotes.
//!
//! This crate provides the read-only Git operations the report needs:
//! - Tag listing and peeling
//! - Commit range and history walks
//! - Changed paths per commit, with rename detection
//! - Submodule enumeration

mod access;
mod error;
mod repository;

pub use access::{CommitId, GitAccess, Submodule};
pub use error::{GitError, GitResult};
pub use repository::LocalRepository;
