//! Generate command.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, ValueEnum};
use tracing::info;

use relnotes_config::{TagPolicy, load_config, load_or_default_from};
use relnotes_core::{ReportBuilder, ReportOptions};
use relnotes_git::LocalRepository;

/// Tag policy argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TagPolicyArg {
    /// Last tag of the tag listing
    Listing,
    /// Tag on the most recent commit
    CommitTime,
    /// Highest semantic version
    Semver,
}

impl From<TagPolicyArg> for TagPolicy {
    fn from(arg: TagPolicyArg) -> Self {
        match arg {
            TagPolicyArg::Listing => TagPolicy::Listing,
            TagPolicyArg::CommitTime => TagPolicy::CommitTime,
            TagPolicyArg::Semver => TagPolicy::Semver,
        }
    }
}

/// Arguments for the generate command.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Repository working directory
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Configuration file (default: relnotes.toml searched from the repository upward)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Report base name; ".txt" is appended
    #[arg(short = 'o', long)]
    pub report_name: Option<String>,

    /// Directory the report is written to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Add a section for each submodule
    #[arg(long)]
    pub submodules: bool,

    /// Group commits by module
    #[arg(long)]
    pub by_modules: bool,

    /// Report the whole history instead of the commits since the last tag
    #[arg(short, long)]
    pub all: bool,

    /// Leave module sets out of the flat layout
    #[arg(long)]
    pub no_modules: bool,

    /// How the last tag is chosen
    #[arg(long, value_enum)]
    pub tag_policy: Option<TagPolicyArg>,

    /// Tag prefix stripped by the semver policy
    #[arg(long)]
    pub tag_prefix: Option<String>,

    /// Fail when a repository section could not be read
    #[arg(long)]
    pub strict: bool,

    /// Print the report instead of writing the file
    #[arg(long)]
    pub stdout: bool,
}

impl GenerateArgs {
    /// Applies command-line overrides on top of configured options.
    fn apply(&self, mut options: ReportOptions) -> ReportOptions {
        if let Some(name) = &self.report_name {
            options.report_name.clone_from(name);
        }
        if let Some(policy) = self.tag_policy {
            options.tag_policy = policy.into();
        }
        if let Some(prefix) = &self.tag_prefix {
            options.tag_prefix.clone_from(prefix);
        }
        options.submodules |= self.submodules;
        options.by_modules |= self.by_modules;
        options.all_commits |= self.all;
        options.include_modules &= !self.no_modules;
        options
    }
}

/// Runs the generate command.
pub fn run(args: GenerateArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => load_config(path),
        None => load_or_default_from(&args.path),
    }
    .context("failed to load configuration")?;

    let builder = ReportBuilder::new(args.apply(ReportOptions::from_config(&config)))
        .context("invalid report options")?;

    let repo = LocalRepository::open(&args.path)
        .with_context(|| format!("failed to open git repository at {}", args.path.display()))?;

    let report = builder.build(&repo);
    info!(
        sections = report.sections().len(),
        skipped = report.skipped().len(),
        failed = report.failures().len(),
        "report built"
    );

    if args.stdout {
        print!("{}", builder.render(&report));
    } else {
        let path = builder
            .write(&report, &args.output_dir)
            .context("failed to write report")?;
        println!("Report written to {}", path.display());
    }

    if args.strict && !report.failures().is_empty() {
        let labels: Vec<&str> = report
            .failures()
            .iter()
            .map(|failure| failure.label.as_str())
            .collect();
        bail!("failed to read: {}", labels.join(", "));
    }

    Ok(())
}
