//! Severity levels and the threshold gate.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Severity of a log line. Lower rank means more severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Panic,
    Fatal,
    Error,
    Warning,
    Info,
    Debug,
    Trace,
}

impl Severity {
    /// All severities, most severe first.
    pub const ALL: [Severity; 7] = [
        Severity::Panic,
        Severity::Fatal,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
        Severity::Debug,
        Severity::Trace,
    ];

    /// Numeric rank compared against the threshold.
    pub fn rank(self) -> u32 {
        self as u32
    }

    pub fn from_rank(rank: u32) -> Option<Self> {
        Self::ALL.get(rank as usize).copied()
    }

    /// Label printed in the `[level]` field of a line.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Panic => "panic",
            Severity::Fatal => "fatal",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Debug => "debug",
            Severity::Trace => "trace",
        }
    }

    /// Panic and fatal end the process after writing.
    pub fn terminates(self) -> bool {
        matches!(self, Severity::Panic | Severity::Fatal)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a severity name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity: {0}")]
pub struct UnknownSeverity(pub String);

impl FromStr for Severity {
    type Err = UnknownSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        if lowered == "warn" {
            return Ok(Severity::Warning);
        }
        Self::ALL
            .into_iter()
            .find(|severity| severity.label() == lowered)
            .ok_or_else(|| UnknownSeverity(s.to_string()))
    }
}

/// Configured write threshold.
///
/// `Unparsed` is what a malformed `LOG_LEVEL` resolves to: the zero-value
/// threshold, which lets every severity through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Threshold {
    Rank(u32),
    Unparsed,
}

impl Threshold {
    /// Raw value used when `LOG_LEVEL` is absent or empty.
    pub const DEFAULT_RAW: &'static str = "2";

    /// Parse an integer threshold.
    ///
    /// Out-of-range integers are truncated to 32 bits, so `-1` becomes
    /// `u32::MAX` and admits everything.
    pub fn parse(raw: &str) -> Result<Self, ParseIntError> {
        let value: i64 = raw.parse()?;
        Ok(Threshold::Rank(value as u32))
    }

    /// Whether a line of this severity is written.
    pub fn admits(self, severity: Severity) -> bool {
        match self {
            Threshold::Rank(rank) => severity.rank() <= rank,
            Threshold::Unparsed => true,
        }
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Threshold::Rank(Severity::Error.rank())
    }
}
