//! Configuration schema definitions.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::logger::hostname::HOSTNAME_FILE;
use crate::logger::Threshold;
use crate::observability::logging::DEFAULT_FILTER;

/// Container name used when `CONTAINER_NAME` is unset or empty.
pub const DEFAULT_CONTAINER_NAME: &str = "service-app-log";

/// Directory holding `<container_name>.log`.
pub const DEFAULT_LOG_DIR: &str = "./log";

/// Resolved logger configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Highest rank that still gets written.
    pub threshold: Threshold,

    /// File stem of the log file and the `[container]` field.
    pub container_name: String,

    pub log_dir: PathBuf,

    pub hostname_file: PathBuf,
}

impl LoggerConfig {
    /// `<log_dir>/<container_name>.log`
    pub fn log_file_path(&self) -> PathBuf {
        self.log_dir.join(format!("{}.log", self.container_name))
    }

    pub fn with_container_name(mut self, name: impl Into<String>) -> Self {
        self.container_name = name.into();
        self
    }

    pub fn with_threshold(mut self, threshold: Threshold) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_log_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.log_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn with_hostname_file(mut self, path: impl AsRef<Path>) -> Self {
        self.hostname_file = path.as_ref().to_path_buf();
        self
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            threshold: Threshold::default(),
            container_name: DEFAULT_CONTAINER_NAME.to_string(),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            hostname_file: PathBuf::from(HOSTNAME_FILE),
        }
    }
}

/// Root of the optional TOML config file.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct FileConfig {
    pub logger: LoggerSection,
    pub observability: ObservabilityConfig,
}

/// `[logger]` table.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggerSection {
    /// Integer threshold as a string, same syntax as `LOG_LEVEL`.
    pub log_level: Option<String>,

    pub container_name: Option<String>,

    pub log_dir: PathBuf,

    pub hostname_file: PathBuf,
}

impl Default for LoggerSection {
    fn default() -> Self {
        Self {
            log_level: None,
            container_name: None,
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            hostname_file: PathBuf::from(HOSTNAME_FILE),
        }
    }
}

/// `[observability]` table.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Diagnostic filter used when `RUST_LOG` is unset.
    pub diagnostic_filter: String,

    /// Serve counters over HTTP for Prometheus.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            diagnostic_filter: DEFAULT_FILTER.to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggerConfig::default();
        assert_eq!(config.threshold, Threshold::Rank(2));
        assert_eq!(config.container_name, "service-app-log");
        assert_eq!(config.log_file_path(), PathBuf::from("./log/service-app-log.log"));
        assert_eq!(config.hostname_file, PathBuf::from("/etc/hostname"));
    }

    #[test]
    fn test_log_file_path_follows_container() {
        let config = LoggerConfig::default().with_container_name("svcX");
        assert_eq!(config.log_file_path(), PathBuf::from("./log/svcX.log"));
    }

    #[test]
    fn test_minimal_toml() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());
        assert!(!config.observability.metrics_enabled);
    }
}
