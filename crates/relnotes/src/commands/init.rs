//! Initialize command.

use anyhow::{Context, Result};
use clap::Args;

use relnotes_config::{CONFIG_FILE_NAME, Config, write_config};

/// Arguments for the init command.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

/// Runs the init command.
pub fn run(args: InitArgs) -> Result<()> {
    write_config(CONFIG_FILE_NAME, &Config::default(), args.force)
        .with_context(|| format!("failed to write {CONFIG_FILE_NAME}"))?;

    println!("Created {CONFIG_FILE_NAME}");
    Ok(())
}
