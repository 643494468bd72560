//! Configuration loading and CLI overrides.
//!
//! The application runs with built-in defaults when no config file is
//! given; a file (json/yaml/toml) can set the data directory and the
//! logging behavior, and a handful of CLI flags override the file.

mod cli;
mod loader;
mod types;
mod validate;

pub use cli::{apply_overrides, CliOverrides};
pub use loader::{load_config, ConfigError};
pub use types::{Config, LoggingConfig, StorageConfig};
pub use validate::validate_config;
