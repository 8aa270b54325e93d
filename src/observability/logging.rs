//! Diagnostic logging.
//!
//! The diagnostic stream is separate from the log files the logger writes.
//! It carries configuration warnings and the reason for a fatal exit.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "container_logger=info";

/// Install the global tracing subscriber writing to stderr.
///
/// `RUST_LOG` wins over `fallback_filter`. Calling this twice is harmless;
/// the second install is ignored.
pub fn init_logging(fallback_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback_filter))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
