//! Level-gated file logger.
//!
//! # Data Flow
//! ```text
//! log_<level>(message)
//!     → counter increment (always)
//!     → threshold gate (rank > threshold: stop)
//!     → format line (timestamp, hostname, container, level, message)
//!     → sink: open <log_dir>/<container>.log, append, close
//!     → panic/fatal: exit(1)
//! ```
//!
//! # Design Decisions
//! - Every call is synchronous; no handle, buffer or lock is kept between calls
//! - Configuration, counters, sink and exit are injected
//! - Open or write failures are unrecoverable and end the process

pub mod error;
pub mod exit;
pub mod format;
pub mod hostname;
pub mod severity;
pub mod sink;

use std::sync::Arc;

pub use error::{LoggerError, LoggerResult};
pub use exit::{ProcessExit, StdExit, EXIT_FAILURE};
pub use format::LogRecord;
pub use severity::{Severity, Threshold, UnknownSeverity};
pub use sink::{FileSink, LineSink, MemorySink};

use crate::config::LoggerConfig;
use crate::observability::metrics::LevelCounters;

/// What happened to a line after the counter was incremented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Written,
    Suppressed,
}

/// Writes severity-tagged lines to a per-container log file.
#[derive(Clone)]
pub struct LevelGatedFileLogger {
    config: LoggerConfig,
    counters: LevelCounters,
    sink: Arc<dyn LineSink>,
    exit: Arc<dyn ProcessExit>,
}

impl LevelGatedFileLogger {
    /// Logger writing real files and exiting the real process.
    pub fn new(config: LoggerConfig, counters: LevelCounters) -> Self {
        Self {
            config,
            counters,
            sink: Arc::new(FileSink),
            exit: Arc::new(StdExit),
        }
    }

    /// Logger configured from `LOG_LEVEL` and `CONTAINER_NAME`, counting
    /// into the global metrics recorder.
    pub fn from_env() -> Self {
        Self::new(LoggerConfig::from_env(), LevelCounters::register())
    }

    pub fn with_sink(mut self, sink: Arc<dyn LineSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_exit(mut self, exit: Arc<dyn ProcessExit>) -> Self {
        self.exit = exit;
        self
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Write a panic line, then exit with status 1.
    pub fn log_panic(&self, message: &str) -> ! {
        self.terminate(Severity::Panic, message)
    }

    /// Write a fatal line, then exit with status 1.
    pub fn log_fatal(&self, message: &str) -> ! {
        self.terminate(Severity::Fatal, message)
    }

    pub fn log_error(&self, message: &str) {
        self.emit(Severity::Error, message);
    }

    pub fn log_warning(&self, message: &str) {
        self.emit(Severity::Warning, message);
    }

    pub fn log_info(&self, message: &str) {
        self.emit(Severity::Info, message);
    }

    pub fn log_debug(&self, message: &str) {
        self.emit(Severity::Debug, message);
    }

    pub fn log_trace(&self, message: &str) {
        self.emit(Severity::Trace, message);
    }

    /// Dispatch to the level operation for `severity`.
    pub fn log(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Panic => self.log_panic(message),
            Severity::Fatal => self.log_fatal(message),
            Severity::Error => self.log_error(message),
            Severity::Warning => self.log_warning(message),
            Severity::Info => self.log_info(message),
            Severity::Debug => self.log_debug(message),
            Severity::Trace => self.log_trace(message),
        }
    }

    /// Count, gate and write without ever exiting the process.
    ///
    /// Panic and fatal are written like any other severity here; the caller
    /// decides what to do next.
    pub fn try_log(&self, severity: Severity, message: &str) -> LoggerResult<Outcome> {
        self.counters.record(severity);
        self.push(severity, message)
    }

    fn push(&self, severity: Severity, message: &str) -> LoggerResult<Outcome> {
        if !self.config.threshold.admits(severity) {
            return Ok(Outcome::Suppressed);
        }

        let path = self.config.log_file_path();
        let hostname = hostname::resolve(&self.config.hostname_file);
        let record = LogRecord::now(
            &hostname,
            &self.config.container_name,
            severity.label(),
            message,
        );
        self.sink.append_line(&path, &record.to_line())?;
        Ok(Outcome::Written)
    }

    fn emit(&self, severity: Severity, message: &str) {
        if let Err(e) = self.try_log(severity, message) {
            self.fail(e);
        }
    }

    fn terminate(&self, severity: Severity, message: &str) -> ! {
        self.emit(severity, message);
        self.exit.exit(EXIT_FAILURE)
    }

    fn fail(&self, err: LoggerError) -> ! {
        tracing::error!(
            container = %self.config.container_name,
            error = %err,
            "Log file unavailable, exiting"
        );
        self.exit.exit(EXIT_FAILURE)
    }
}

impl std::fmt::Debug for LevelGatedFileLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LevelGatedFileLogger")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observability::metrics::{counter_name, FATAL_COUNTER};
    use metrics::Counter;
    use std::collections::HashMap;
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Unwinds instead of exiting so tests can observe the exit.
    struct PanickingExit;

    impl ProcessExit for PanickingExit {
        fn exit(&self, code: i32) -> ! {
            panic!("process exit {}", code)
        }
    }

    struct Harness {
        logger: LevelGatedFileLogger,
        sink: Arc<MemorySink>,
        cells: HashMap<&'static str, Arc<AtomicU64>>,
    }

    impl Harness {
        fn new(threshold: Threshold) -> Self {
            let mut cells = HashMap::new();
            let counters = LevelCounters::from_fn(|name| {
                let cell = Arc::new(AtomicU64::new(0));
                cells.insert(name, cell.clone());
                Counter::from_arc(cell)
            });
            let sink = Arc::new(MemorySink::new());
            let config = LoggerConfig::default()
                .with_threshold(threshold)
                .with_container_name("svc")
                .with_hostname_file("/nonexistent/hostname");
            let logger = LevelGatedFileLogger::new(config, counters)
                .with_sink(sink.clone())
                .with_exit(Arc::new(PanickingExit));
            Self { logger, sink, cells }
        }

        fn count(&self, name: &str) -> u64 {
            self.cells[name].load(Ordering::SeqCst)
        }
    }

    fn exit_message(result: std::thread::Result<()>) -> String {
        let payload = result.expect_err("expected exit");
        payload
            .downcast_ref::<String>()
            .cloned()
            .unwrap_or_default()
    }

    #[test]
    fn test_error_written_at_default_threshold() {
        let h = Harness::new(Threshold::default());
        h.logger.log_error("boom");

        let lines = h.sink.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].line.contains("[svc] [error] boom \n"));
        assert_eq!(lines[0].path, std::path::PathBuf::from("./log/svc.log"));
    }

    #[test]
    fn test_suppressed_lines_still_count() {
        let h = Harness::new(Threshold::Rank(1));
        let returning: Vec<_> = Severity::ALL.into_iter().filter(|s| !s.terminates()).collect();

        for severity in &returning {
            h.logger.log(*severity, "quiet");
        }

        assert!(h.sink.is_empty());
        for severity in returning {
            assert_eq!(h.count(counter_name(severity)), 1, "{} counter", severity);
        }
        assert_eq!(h.count(FATAL_COUNTER), 0);
    }

    #[test]
    fn test_try_log_outcome() {
        let h = Harness::new(Threshold::Rank(3));
        assert_eq!(h.logger.try_log(Severity::Warning, "w").unwrap(), Outcome::Written);
        assert_eq!(h.logger.try_log(Severity::Info, "i").unwrap(), Outcome::Suppressed);
        assert_eq!(h.sink.len(), 1);
    }

    #[test]
    fn test_fatal_writes_then_exits() {
        let h = Harness::new(Threshold::default());
        let result = catch_unwind(AssertUnwindSafe(|| {
            h.logger.log_fatal("going down");
        }));

        assert_eq!(exit_message(result), "process exit 1");
        assert_eq!(h.sink.len(), 1);
        assert!(h.sink.lines()[0].line.contains("[fatal] going down"));
        assert_eq!(h.count(FATAL_COUNTER), 1);
    }

    #[test]
    fn test_panic_exits_and_counts_as_fatal() {
        let h = Harness::new(Threshold::default());
        let result = catch_unwind(AssertUnwindSafe(|| {
            h.logger.log(Severity::Panic, "x");
        }));

        assert_eq!(exit_message(result), "process exit 1");
        assert!(h.sink.lines()[0].line.contains("[panic] x"));
        assert_eq!(h.count(FATAL_COUNTER), 1);
    }

    #[test]
    fn test_open_failure_exits() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggerConfig::default().with_log_dir(dir.path().join("missing"));
        let logger = LevelGatedFileLogger::new(config, LevelCounters::noop())
            .with_exit(Arc::new(PanickingExit));

        let result = catch_unwind(AssertUnwindSafe(|| logger.log_error("lost")));
        assert_eq!(exit_message(result), "process exit 1");
    }
}
