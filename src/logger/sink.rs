//! Line sinks.
//!
//! A sink appends one already formatted line to a path. The file sink opens
//! and closes the file on every call; nothing is cached between calls.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::error::{LoggerError, LoggerResult};

/// Append one formatted line to the file at `path`.
pub trait LineSink: Send + Sync {
    fn append_line(&self, path: &Path, line: &str) -> LoggerResult<()>;
}

/// Appends to real files, creating them when absent.
///
/// The parent directory must already exist.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSink;

/// Permission bits for newly created log files.
#[cfg(unix)]
const CREATE_MODE: u32 = 0o755;

impl FileSink {
    fn open(path: &Path) -> std::io::Result<std::fs::File> {
        let mut options = OpenOptions::new();
        options.read(true).append(true).create(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(CREATE_MODE);
        }
        options.open(path)
    }
}

impl LineSink for FileSink {
    fn append_line(&self, path: &Path, line: &str) -> LoggerResult<()> {
        let mut file = Self::open(path).map_err(|source| LoggerError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        // Single write on an O_APPEND descriptor; the file closes on drop.
        file.write_all(line.as_bytes())
            .map_err(|source| LoggerError::Write {
                path: path.to_path_buf(),
                source,
            })
    }
}

/// A line captured by [`MemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedLine {
    pub path: PathBuf,
    pub line: String,
}

/// Keeps lines in memory instead of touching the filesystem.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<CapturedLine>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything appended so far.
    pub fn lines(&self) -> Vec<CapturedLine> {
        self.lines.lock().expect("memory sink mutex poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().expect("memory sink mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LineSink for MemorySink {
    fn append_line(&self, path: &Path, line: &str) -> LoggerResult<()> {
        self.lines
            .lock()
            .expect("memory sink mutex poisoned")
            .push(CapturedLine {
                path: path.to_path_buf(),
                line: line.to_string(),
            });
        Ok(())
    }
}
