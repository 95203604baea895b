//! Pluggable reporting for anomalous resolver input.
//!
//! Negative durations should never come out of an upstream range
//! computation, but clock skew and malformed query params make them happen.
//! The resolver never fails on them; it reports them here and falls back to
//! the finest bucket size.

use tracing::warn;

/// Receives anomalies seen while resolving intervals.
pub trait DiagnosticHook: Send + Sync {
    /// Called when a ladder is queried with a negative duration.
    fn on_negative_duration(&self, minutes: i64);
}

/// Default hook: logs a warning through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingHook;

impl DiagnosticHook for TracingHook {
    fn on_negative_duration(&self, minutes: i64) {
        warn!(minutes, "Negative duration when resolving interval, using finest granularity");
    }
}

/// Hook that drops every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentHook;

impl DiagnosticHook for SilentHook {
    fn on_negative_duration(&self, _minutes: i64) {}
}
