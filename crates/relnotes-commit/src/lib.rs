//! Commit types for relnotes.
//!
//! This crate provides the commit types shared by the report pipeline:
//! - [`RawCommit`]: A commit as retrieved from Git
//! - [`CommitRecord`]: A commit with its changed paths and derived modules
//! - [`CommitCollection`]: The ordered commits of one repository section

mod collection;
mod raw;
mod record;

pub use collection::CommitCollection;
pub use raw::RawCommit;
pub use record::{CommitRecord, module_of, normalize_message};
