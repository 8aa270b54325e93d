//! Environment resolution of the logger settings.

use crate::config::schema::{FileConfig, LoggerConfig, DEFAULT_CONTAINER_NAME};
use crate::logger::Threshold;

pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";
pub const CONTAINER_NAME_VAR: &str = "CONTAINER_NAME";

/// Resolve a raw `LOG_LEVEL` value.
///
/// Absent or empty means the default (`"2"`). A value that is not an
/// integer is reported on the diagnostic stream and yields
/// [`Threshold::Unparsed`].
pub fn resolve_threshold(raw: Option<&str>) -> Threshold {
    let raw = match raw {
        Some(value) if !value.is_empty() => value,
        _ => Threshold::DEFAULT_RAW,
    };

    match Threshold::parse(raw) {
        Ok(threshold) => threshold,
        Err(e) => {
            tracing::warn!(
                value = raw,
                error = %e,
                "Invalid {}, writing every severity",
                LOG_LEVEL_VAR
            );
            Threshold::Unparsed
        }
    }
}

/// Resolve a raw `CONTAINER_NAME` value; absent or empty means the default.
pub fn resolve_container_name(raw: Option<&str>) -> String {
    match raw {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => DEFAULT_CONTAINER_NAME.to_string(),
    }
}

impl LoggerConfig {
    /// Resolve from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    /// Resolve against an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        FileConfig::default().resolve(lookup)
    }
}

impl FileConfig {
    /// Merge file values with the environment. Non-empty environment
    /// variables take precedence.
    pub fn resolve<F>(&self, lookup: F) -> LoggerConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let section = &self.logger;
        let level = non_empty(lookup(LOG_LEVEL_VAR)).or_else(|| section.log_level.clone());
        let container =
            non_empty(lookup(CONTAINER_NAME_VAR)).or_else(|| section.container_name.clone());

        LoggerConfig {
            threshold: resolve_threshold(level.as_deref()),
            container_name: resolve_container_name(container.as_deref()),
            log_dir: section.log_dir.clone(),
            hostname_file: section.hostname_file.clone(),
        }
    }

    /// [`FileConfig::resolve`] against the process environment.
    pub fn resolve_env(&self) -> LoggerConfig {
        self.resolve(env_lookup)
    }
}

/// Reads a variable; non-unicode values are passed through lossily so they
/// still count as "set" (and fail integer parsing).
fn env_lookup(name: &str) -> Option<String> {
    std::env::var_os(name).map(|value| value.to_string_lossy().into_owned())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
