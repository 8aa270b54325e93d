//! Line formatting.

use chrono::{DateTime, Local, TimeZone};

/// Timestamp layout, e.g. `2024-03-01 14:05:09`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The fields of one line. Built per call and dropped after the write.
#[derive(Debug, Clone)]
pub struct LogRecord<'a> {
    pub timestamp: String,
    pub hostname: &'a str,
    pub container: &'a str,
    pub level: &'static str,
    pub message: &'a str,
}

impl<'a> LogRecord<'a> {
    /// Record stamped with the current local time.
    pub fn now(hostname: &'a str, container: &'a str, level: &'static str, message: &'a str) -> Self {
        Self::at(&Local::now(), hostname, container, level, message)
    }

    pub fn at<Tz>(
        time: &DateTime<Tz>,
        hostname: &'a str,
        container: &'a str,
        level: &'static str,
        message: &'a str,
    ) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        Self {
            timestamp: time.format(TIMESTAMP_FORMAT).to_string(),
            hostname,
            container,
            level,
            message,
        }
    }

    /// `[timestamp] [hostname] [container] [level] message \n`
    ///
    /// The space before the newline is part of the format.
    pub fn to_line(&self) -> String {
        format!(
            "[{}] [{}] [{}] [{}] {} \n",
            self.timestamp, self.hostname, self.container, self.level, self.message
        )
    }
}
