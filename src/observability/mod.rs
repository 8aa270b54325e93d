//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Level operations produce:
//!     → metrics.rs (one counter increment per call)
//!     → logging.rs (diagnostics: config warnings, fatal write errors)
//!
//! Consumers:
//!     → Metrics endpoint (Prometheus scrape)
//!     → stderr (diagnostic stream, never the log file)
//! ```
//!
//! # Design Decisions
//! - Counters are handles passed into the logger, not globals
//! - Counter increments happen before the threshold gate

pub mod logging;
pub mod metrics;
