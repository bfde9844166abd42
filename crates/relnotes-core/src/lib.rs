//! Core library for relnotes.
//!
//! This crate turns a repository's history into a plain-text report:
//! range selection, commit collection, rendering and assembly across
//! submodules.

mod collector;
mod error;
mod range;
mod render;
mod report;

#[cfg(test)]
mod testing;

pub use collector::collect_commits;
pub use error::{CoreError, CoreResult};
pub use range::{CommitRange, RangeSelector};
pub use render::{ALL_COMMITS_HEADER, Renderer, SINCE_TAG_HEADER};
pub use report::{Report, ReportBuilder, ReportOptions, SectionFailure};
