//! Report assembly across a repository and its submodules.

use std::path::{Path, PathBuf};

use relnotes_commit::CommitCollection;
use relnotes_config::{Config, ConfigError, TagPolicy, validate_date_format};
use relnotes_git::GitAccess;
use tracing::{info, warn};

use crate::{CoreError, CoreResult, RangeSelector, Renderer, collect_commits};

/// Settings for one report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Base name of the output file.
    pub report_name: String,
    /// Add a section per submodule.
    pub submodules: bool,
    /// Group commits by module.
    pub by_modules: bool,
    /// Show module sets in the flat layout.
    pub include_modules: bool,
    /// Ignore tags and report the whole history.
    pub all_commits: bool,
    pub tag_policy: TagPolicy,
    pub tag_prefix: String,
    pub date_format: String,
}

impl ReportOptions {
    /// Builds options from a loaded configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            report_name: config.report.name.clone(),
            submodules: config.submodules.enabled,
            by_modules: config.report.by_modules,
            include_modules: config.report.include_modules,
            all_commits: config.range.all_commits,
            tag_policy: config.range.tag_policy,
            tag_prefix: config.range.tag_prefix.clone(),
            date_format: config.report.date_format.clone(),
        }
    }

    /// Checks the values that configuration loading would have rejected.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Options`] for an empty report name or a date
    /// format chrono cannot render.
    pub fn validate(&self) -> CoreResult<()> {
        if self.report_name.trim().is_empty() {
            return Err(ConfigError::Invalid("report name is empty".to_string()).into());
        }
        validate_date_format(&self.date_format)?;
        Ok(())
    }

    /// The report file name, `<report_name>.txt`.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.txt", self.report_name)
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// A repository whose section could not be built.
#[derive(Debug)]
pub struct SectionFailure {
    /// Repository or submodule label.
    pub label: String,
    /// What went wrong.
    pub error: CoreError,
}

/// Sections collected for one run.
#[derive(Debug, Default)]
pub struct Report {
    all_commits: bool,
    sections: Vec<CommitCollection>,
    skipped: Vec<String>,
    failures: Vec<SectionFailure>,
}

impl Report {
    /// Creates a report from already collected sections.
    #[must_use]
    pub fn new(all_commits: bool, sections: Vec<CommitCollection>) -> Self {
        Self {
            all_commits,
            sections,
            ..Self::default()
        }
    }

    /// Whether the sections cover the whole history.
    pub fn all_commits(&self) -> bool {
        self.all_commits
    }

    /// Rendered sections, main repository first.
    pub fn sections(&self) -> &[CommitCollection] {
        &self.sections
    }

    /// Labels of repositories left out for lack of a valid range.
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    /// Repositories left out because they could not be read.
    pub fn failures(&self) -> &[SectionFailure] {
        &self.failures
    }

    fn record(&mut self, label: String, outcome: CoreResult<CommitCollection>) {
        match outcome {
            Ok(collection) => {
                info!(repository = %label, commits = collection.len(), "section collected");
                self.sections.push(collection);
            }
            Err(error) if error.is_invalid_range() => {
                warn!(repository = %label, %error, "section skipped");
                self.skipped.push(label);
            }
            Err(error) => {
                warn!(repository = %label, %error, "section failed");
                self.failures.push(SectionFailure { label, error });
            }
        }
    }
}

/// Builds and writes reports.
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    options: ReportOptions,
    selector: RangeSelector,
    renderer: Renderer,
}

impl ReportBuilder {
    /// Creates a builder for the given options.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Options`] if the options fail validation.
    pub fn new(options: ReportOptions) -> CoreResult<Self> {
        options.validate()?;
        let selector = RangeSelector::new(
            options.all_commits,
            options.tag_policy,
            options.tag_prefix.clone(),
        );
        let renderer = Renderer::new(
            options.by_modules,
            options.include_modules,
            options.date_format.clone(),
        );
        Ok(Self {
            options,
            selector,
            renderer,
        })
    }

    /// Returns the options this builder was created with.
    pub fn options(&self) -> &ReportOptions {
        &self.options
    }

    /// Collects the sections of `repo` and, if enabled, of its submodules.
    ///
    /// Failures are scoped to the repository they occur in: they are recorded
    /// in the report and the remaining repositories are still processed. A
    /// submodule listing that cannot be read is recorded as
    /// `<label> submodules`.
    pub fn build<G: GitAccess>(&self, repo: &G) -> Report {
        let mut report = Report::new(self.options.all_commits, Vec::new());

        let label = repo.name();
        report.record(label.clone(), self.section(repo, label.clone()));

        if self.options.submodules {
            match repo.submodules() {
                Ok(submodules) => {
                    for submodule in submodules {
                        let outcome = submodule
                            .repository
                            .map_err(CoreError::from)
                            .and_then(|sub| self.section(&sub, submodule.name.clone()));
                        report.record(submodule.name, outcome);
                    }
                }
                Err(e) => report.record(format!("{label} submodules"), Err(e.into())),
            }
        }

        report
    }

    fn section<G: GitAccess>(&self, repo: &G, label: String) -> CoreResult<CommitCollection> {
        let range = self.selector.select(repo)?;
        collect_commits(repo, &range, label)
    }

    /// Renders a report as text.
    pub fn render(&self, report: &Report) -> String {
        self.renderer.render_report(report)
    }

    /// Renders and writes a report to `<dir>/<report_name>.txt`, replacing
    /// any previous content.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Write`] if the file cannot be written.
    pub fn write(&self, report: &Report, dir: impl AsRef<Path>) -> CoreResult<PathBuf> {
        let path = dir.as_ref().join(self.options.file_name());
        std::fs::write(&path, self.render(report)).map_err(|source| CoreError::Write {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "report written");
        Ok(path)
    }
}
