//! Errors raised on the write path.

use std::path::PathBuf;
use thiserror::Error;

/// Failures while appending a line to the log file.
///
/// Neither variant is recoverable: the level operations report it and end
/// the process.
#[derive(Debug, Error)]
pub enum LoggerError {
    /// The log file could not be opened or created.
    #[error("failed to open log file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The line could not be written to an open log file.
    #[error("failed to write log file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for the write path.
pub type LoggerResult<T> = Result<T, LoggerError>;
