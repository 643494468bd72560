//! Configuration type definitions for storage and logging.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the role ledger files. The role-to-filename
    /// mapping inside it is fixed and not configurable.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    pub level: Option<String>,
    /// Log format: json, pretty, or compact. Default: pretty.
    pub format: Option<String>,
    /// Output target: stdout or stderr. Default: stderr.
    pub output: Option<String>,
    /// Per-module log level filters (e.g., {"rolegate_store": "debug"}).
    #[serde(default)]
    pub filters: HashMap<String, String>,
}

fn default_data_dir() -> String {
    ".".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.storage.data_dir, ".");
        assert!(cfg.logging.level.is_none());
        assert!(cfg.logging.format.is_none());
        assert!(cfg.logging.filters.is_empty());
    }

    #[test]
    fn deserialize_minimal() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg.storage.data_dir, ".");
    }

    #[test]
    fn deserialize_full() {
        let toml_str = r#"
[storage]
data_dir = "/var/lib/rolegate"

[logging]
level = "debug"
format = "json"
output = "stdout"

[logging.filters]
rolegate_store = "trace"
"#;
        let cfg: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.storage.data_dir, "/var/lib/rolegate");
        assert_eq!(cfg.logging.level.as_deref(), Some("debug"));
        assert_eq!(cfg.logging.format.as_deref(), Some("json"));
        assert_eq!(cfg.logging.output.as_deref(), Some("stdout"));
        assert_eq!(
            cfg.logging.filters.get("rolegate_store").map(String::as_str),
            Some("trace")
        );
    }
}
