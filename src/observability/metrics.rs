//! Metrics collection and exposition.
//!
//! # Metrics
//! - `triggered_send_to_fatal_log_total` (counter): panic and fatal calls
//! - `triggered_send_to_error_log_total` (counter)
//! - `triggered_send_to_warning_log_total` (counter)
//! - `triggered_send_to_info_log_total` (counter)
//! - `triggered_send_to_debug_log_total` (counter)
//! - `triggered_send_to_trace_log_total` (counter)
//!
//! Every call counts, including calls the threshold suppresses.

use std::net::SocketAddr;

use metrics::{counter, describe_counter, Counter};
use metrics_exporter_prometheus::PrometheusBuilder;

use crate::logger::Severity;

pub const FATAL_COUNTER: &str = "triggered_send_to_fatal_log_total";
pub const ERROR_COUNTER: &str = "triggered_send_to_error_log_total";
pub const WARNING_COUNTER: &str = "triggered_send_to_warning_log_total";
pub const INFO_COUNTER: &str = "triggered_send_to_info_log_total";
pub const DEBUG_COUNTER: &str = "triggered_send_to_debug_log_total";
pub const TRACE_COUNTER: &str = "triggered_send_to_trace_log_total";

/// Name of the counter a severity increments. Panic shares the fatal counter.
pub fn counter_name(severity: Severity) -> &'static str {
    match severity {
        Severity::Panic | Severity::Fatal => FATAL_COUNTER,
        Severity::Error => ERROR_COUNTER,
        Severity::Warning => WARNING_COUNTER,
        Severity::Info => INFO_COUNTER,
        Severity::Debug => DEBUG_COUNTER,
        Severity::Trace => TRACE_COUNTER,
    }
}

/// Install the Prometheus recorder and serve it on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    let builder = PrometheusBuilder::new().with_http_listener(addr);
    match builder.install() {
        Ok(()) => {
            describe_counters();
            tracing::info!(address = %addr, "Metrics exporter listening");
        }
        Err(e) => tracing::error!(error = %e, "Failed to install Prometheus exporter"),
    }
}

/// Register help texts with the installed recorder.
pub fn describe_counters() {
    describe_counter!(FATAL_COUNTER, "Total number of fatal level messages sent to the log");
    describe_counter!(ERROR_COUNTER, "Total number of error level messages sent to the log");
    describe_counter!(WARNING_COUNTER, "Total number of warning level messages sent to the log");
    describe_counter!(INFO_COUNTER, "Total number of info level messages sent to the log");
    describe_counter!(DEBUG_COUNTER, "Total number of debug level messages sent to the log");
    describe_counter!(TRACE_COUNTER, "Total number of trace level messages sent to the log");
}

/// Counter handles, one per metric.
#[derive(Clone)]
pub struct LevelCounters {
    fatal: Counter,
    error: Counter,
    warning: Counter,
    info: Counter,
    debug: Counter,
    trace: Counter,
}

impl LevelCounters {
    /// Handles from the globally installed recorder.
    ///
    /// Handles obtained before a recorder is installed are no-ops.
    pub fn register() -> Self {
        Self::from_fn(|name| counter!(name))
    }

    /// Handles that count nothing.
    pub fn noop() -> Self {
        Self::from_fn(|_| Counter::noop())
    }

    /// Build handles by metric name.
    pub fn from_fn(mut make: impl FnMut(&'static str) -> Counter) -> Self {
        Self {
            fatal: make(FATAL_COUNTER),
            error: make(ERROR_COUNTER),
            warning: make(WARNING_COUNTER),
            info: make(INFO_COUNTER),
            debug: make(DEBUG_COUNTER),
            trace: make(TRACE_COUNTER),
        }
    }

    pub fn for_severity(&self, severity: Severity) -> &Counter {
        match severity {
            Severity::Panic | Severity::Fatal => &self.fatal,
            Severity::Error => &self.error,
            Severity::Warning => &self.warning,
            Severity::Info => &self.info,
            Severity::Debug => &self.debug,
            Severity::Trace => &self.trace,
        }
    }

    pub fn record(&self, severity: Severity) {
        self.for_severity(severity).increment(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_panic_shares_fatal_counter() {
        assert_eq!(counter_name(Severity::Panic), counter_name(Severity::Fatal));
        let distinct: std::collections::HashSet<_> =
            Severity::ALL.iter().map(|s| counter_name(*s)).collect();
        assert_eq!(distinct.len(), 6);
    }

    #[test]
    fn test_record_hits_matching_handle() {
        let mut cells: HashMap<&'static str, Arc<AtomicU64>> = HashMap::new();
        let counters = LevelCounters::from_fn(|name| {
            let cell = Arc::new(AtomicU64::new(0));
            cells.insert(name, cell.clone());
            Counter::from_arc(cell)
        });

        counters.record(Severity::Warning);
        counters.record(Severity::Panic);
        counters.record(Severity::Fatal);

        assert_eq!(cells[WARNING_COUNTER].load(Ordering::SeqCst), 1);
        assert_eq!(cells[FATAL_COUNTER].load(Ordering::SeqCst), 2);
        assert_eq!(cells[ERROR_COUNTER].load(Ordering::SeqCst), 0);
    }
}
