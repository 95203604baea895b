//! # bucketry
//!
//! Picks the time-series bucket size ("interval") for a requested time range.
//!
//! Chart wrappers pass the result to axis and tooltip formatting; analytics
//! views send it to metrics and events backends as the query bucket size.
//! The tables must match the backends' pre-aggregation, so they are fixed
//! per [`Fidelity`] profile.
//!
//! ## Architecture
//!
//! ```text
//! TimeRange ──▶ diff_in_minutes ──▶ minutes
//!                  │                  │
//!              parse_period           ▼
//!                          profiles::ladder(fidelity)
//!                                     │
//!                                     ▼
//!                      GranularityLadder::interval_for ──▶ Interval
//!                                     │
//!                            (negative input)
//!                                     ▼
//!                               DiagnosticHook
//! ```
//!
//! - **[`ladder`]**: [`GranularityLadder`], a descending threshold table
//! - **[`profiles`]**: the built-in ladder for each [`Fidelity`] plus the series API ladder
//! - **[`period`]**: period shorthand parsing (`"24h"`, `"90d"`)
//! - **[`resolve`]**: range length, profile dispatch and the [`Resolver`]
//! - **[`diagnostics`]**: the pluggable [`DiagnosticHook`]
//! - **[`settings`]**: [`Settings`] loaded from file and environment
//!
//! ## Usage
//!
//! ```
//! use bucketry::{interval, series_api_interval, Fidelity, Interval, TimeRange};
//!
//! let range = TimeRange::period("60d");
//! assert_eq!(interval(&range, Fidelity::Low).unwrap(), Interval::days(2));
//! assert_eq!(series_api_interval(&TimeRange::period("24h")).unwrap(), Interval::hours(1));
//! ```
//!
//! ### With a custom hook
//!
//! ```
//! use std::sync::Arc;
//! use bucketry::{DiagnosticHook, EpochMillis, Fidelity, Resolver, TimeRange};
//!
//! struct Counter(std::sync::atomic::AtomicUsize);
//!
//! impl DiagnosticHook for Counter {
//!     fn on_negative_duration(&self, _minutes: i64) {
//!         self.0.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
//!     }
//! }
//!
//! let counter = Arc::new(Counter(Default::default()));
//! let resolver = Resolver::default().with_hook(counter.clone());
//!
//! // end before start
//! let range = TimeRange::absolute(EpochMillis::from_secs(600), EpochMillis::from_secs(0));
//! let interval = resolver.interval(&range, Fidelity::Medium).unwrap();
//! assert_eq!(interval.to_string(), "5m");
//! assert_eq!(counter.0.load(std::sync::atomic::Ordering::Relaxed), 1);
//! ```

pub mod diagnostics;
pub mod error;
pub mod ladder;
pub mod period;
pub mod profiles;
pub mod resolve;
pub mod settings;

pub use bucketry_types::{EpochMillis, Fidelity, Interval, IntervalUnit, TimeRange};
pub use diagnostics::{DiagnosticHook, SilentHook, TracingHook};
pub use error::{Error, Result};
pub use ladder::{GranularityLadder, GranularityStep};
pub use period::{parse_period, period_to_hours, DEFAULT_STATS_PERIOD};
pub use resolve::{
    bucket_count, diff_in_minutes, interval, series_api_interval, Resolution, Resolver,
};
pub use settings::Settings;
