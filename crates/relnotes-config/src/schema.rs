//! Configuration schema.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult};

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Report output and layout.
    #[serde(default)]
    pub report: ReportConfig,

    /// Commit range selection.
    #[serde(default)]
    pub range: RangeConfig,

    /// Submodule handling.
    #[serde(default)]
    pub submodules: SubmodulesConfig,
}

impl Config {
    /// Checks values that deserialize fine but cannot produce a report.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first offending value.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.report.name.trim().is_empty() {
            return Err(ConfigError::Invalid("report name is empty".to_string()));
        }

        validate_date_format(&self.report.date_format)
    }
}

/// Checks that `format` is a strftime pattern chrono can render.
///
/// # Errors
///
/// Returns [`ConfigError::Invalid`] if the pattern has an unknown specifier.
pub fn validate_date_format(format: &str) -> ConfigResult<()> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(ConfigError::Invalid(format!("invalid date format: {format}")));
    }
    Ok(())
}

/// Report configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Base name of the output file; `.txt` is appended.
    #[serde(default = "default_report_name")]
    pub name: String,

    /// Group commits under the modules they touch.
    #[serde(default)]
    pub by_modules: bool,

    /// Show the module set on each line of the flat layout.
    #[serde(default = "default_true")]
    pub include_modules: bool,

    /// `strftime` pattern used for commit dates.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            name: default_report_name(),
            by_modules: false,
            include_modules: default_true(),
            date_format: default_date_format(),
        }
    }
}

fn default_report_name() -> String {
    "release-notes".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_true() -> bool {
    true
}

/// How the "last" tag is chosen as the range boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TagPolicy {
    /// Last entry of the tag listing.
    #[default]
    Listing,

    /// Tag whose commit is the most recent.
    CommitTime,

    /// Highest semantic version after stripping the tag prefix.
    Semver,
}

/// Range configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeConfig {
    /// Report the whole history instead of the commits since the last tag.
    #[serde(default)]
    pub all_commits: bool,

    /// Last tag selection.
    #[serde(default)]
    pub tag_policy: TagPolicy,

    /// Prefix stripped from tag names by the semver policy.
    #[serde(default = "default_tag_prefix")]
    pub tag_prefix: String,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            all_commits: false,
            tag_policy: TagPolicy::default(),
            tag_prefix: default_tag_prefix(),
        }
    }
}

fn default_tag_prefix() -> String {
    "v".to_string()
}

/// Submodule configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmodulesConfig {
    /// Add a section for every submodule.
    #[serde(default)]
    pub enabled: bool,
}
