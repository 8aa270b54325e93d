//! Leveled file logger for a single service process.
//!
//! Each level operation counts the call, then appends one line to
//! `./log/<container>.log` if the severity passes the configured threshold.

pub mod config;
pub mod lifecycle;
pub mod logger;
pub mod observability;
pub mod pipe;

pub use config::LoggerConfig;
pub use logger::{LevelGatedFileLogger, Severity, Threshold};
