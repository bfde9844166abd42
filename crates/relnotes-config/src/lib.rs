//! Configuration management for relnotes.
//!
//! This crate handles loading and validating the `relnotes.toml` configuration file.

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{
    CONFIG_FILE_NAME, find_and_load_config_from, load_config, load_or_default_from, write_config,
};
pub use schema::{
    Config, RangeConfig, ReportConfig, SubmodulesConfig, TagPolicy, validate_date_format,
};
