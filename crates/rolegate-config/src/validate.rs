//! Configuration validation.

use crate::{Config, ConfigError};

pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.storage.data_dir.trim().is_empty() {
        return Err(ConfigError::Validation("storage.data_dir is empty".into()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if let Some(level) = config.logging.level.as_deref() {
        if !valid_levels.contains(&level) {
            return Err(ConfigError::Validation(format!(
                "logging.level must be one of: {:?}",
                valid_levels
            )));
        }
    }

    let valid_formats = ["json", "pretty", "compact"];
    if let Some(format) = config.logging.format.as_deref() {
        if !valid_formats.contains(&format) {
            return Err(ConfigError::Validation(format!(
                "logging.format must be one of: {:?}",
                valid_formats
            )));
        }
    }

    let valid_outputs = ["stdout", "stderr"];
    if let Some(output) = config.logging.output.as_deref() {
        if !valid_outputs.contains(&output) {
            return Err(ConfigError::Validation(format!(
                "logging.output must be one of: {:?}",
                valid_outputs
            )));
        }
    }

    Ok(())
}
