//! Pipe mode: log lines read from an async reader.
//!
//! Each input line is `<level> <message>`, e.g. `warning disk almost full`.
//! Blank lines are ignored; lines with an unknown level or invalid UTF-8 are
//! reported on the diagnostic stream and skipped.

use std::future::Future;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::logger::{LevelGatedFileLogger, Severity, UnknownSeverity};

/// Split an input line into severity and message.
///
/// Returns `Ok(None)` for blank lines. The message may be empty.
pub fn parse_line(line: &str) -> Result<Option<(Severity, &str)>, UnknownSeverity> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    if trimmed.trim().is_empty() {
        return Ok(None);
    }

    let (level, message) = match trimmed.split_once(char::is_whitespace) {
        Some((level, message)) => (level, message.trim_start()),
        None => (trimmed, ""),
    };
    let severity: Severity = level.parse()?;
    Ok(Some((severity, message)))
}

/// Summary of a pipe run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipeStats {
    pub logged: u64,
    pub rejected: u64,
}

/// Read lines until EOF or until `shutdown` resolves.
///
/// Writes run on the blocking pool. A panic or fatal line ends the process
/// through the logger, so it is the last line handled.
pub async fn run<R, S>(mut reader: R, logger: LevelGatedFileLogger, shutdown: S) -> std::io::Result<PipeStats>
where
    R: AsyncBufRead + Unpin,
    S: Future<Output = ()>,
{
    let mut buf = Vec::new();
    let mut stats = PipeStats::default();
    tokio::pin!(shutdown);

    loop {
        buf.clear();
        let read = tokio::select! {
            read = reader.read_until(b'\n', &mut buf) => read?,
            _ = &mut shutdown => {
                tracing::info!("Pipe mode stopping");
                break;
            }
        };
        if read == 0 {
            break;
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!(error = %e, "Skipping input line that is not UTF-8");
                stats.rejected += 1;
                continue;
            }
        };

        match parse_line(line) {
            Ok(Some((severity, message))) => {
                if severity.terminates() {
                    tracing::info!(level = %severity, "Terminating line received, pipe mode ends");
                }
                let logger = logger.clone();
                let message = message.to_string();
                tokio::task::spawn_blocking(move || logger.log(severity, &message))
                    .await
                    .map_err(std::io::Error::other)?;
                stats.logged += 1;
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(error = %e, "Skipping input line");
                stats.rejected += 1;
            }
        }
    }

    tracing::debug!(logged = stats.logged, rejected = stats.rejected, "Pipe mode finished");
    Ok(stats)
}
