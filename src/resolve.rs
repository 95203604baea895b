//! Time range to bucket size resolution.
//!
//! The free functions use [`DEFAULT_STATS_PERIOD`] and log anomalies through
//! `tracing`. A [`Resolver`] carries its own default period and
//! [`DiagnosticHook`], usually built from [`Settings`].

use std::sync::Arc;

use bucketry_types::{Fidelity, Interval, TimeRange};
use serde::Serialize;
use tracing::debug;

use crate::diagnostics::{DiagnosticHook, TracingHook};
use crate::error::Result;
use crate::ladder::GranularityLadder;
use crate::period::{parse_period, DEFAULT_STATS_PERIOD};
use crate::profiles;
use crate::settings::Settings;

/// Length of a time range in whole minutes.
///
/// Absolute bounds win over the period. Without bounds or period the
/// default period is used.
pub fn diff_in_minutes(range: &TimeRange) -> Result<i64> {
    diff_with_default(range, DEFAULT_STATS_PERIOD)
}

/// Bucket size for `range` under a fidelity profile.
pub fn interval(range: &TimeRange, fidelity: Fidelity) -> Result<Interval> {
    let minutes = diff_in_minutes(range)?;
    Ok(profiles::ladder(fidelity).interval_for(minutes))
}

/// Bucket size for `range` on the events series API.
pub fn series_api_interval(range: &TimeRange) -> Result<Interval> {
    let minutes = diff_in_minutes(range)?;
    Ok(profiles::series_api_ladder().interval_for(minutes))
}

fn diff_with_default(range: &TimeRange, default_period: &str) -> Result<i64> {
    if let Some((start, end)) = range.bounds() {
        return Ok(end.minutes_since(start));
    }

    let period = range.period.as_deref().unwrap_or(default_period);
    let secs = parse_period(period)?.as_secs();
    Ok(i64::try_from(secs / 60).unwrap_or(i64::MAX))
}

/// Outcome of resolving one range, as reported by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Profile used, `None` for the series API ladder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fidelity: Option<Fidelity>,
    /// Range length in minutes.
    pub minutes: i64,
    /// Selected bucket size.
    pub interval: Interval,
    /// Number of buckets a chart will draw for the range.
    pub bucket_count: u64,
}

impl Resolution {
    fn new(fidelity: Option<Fidelity>, minutes: i64, interval: Interval) -> Self {
        Self {
            fidelity,
            minutes,
            interval,
            bucket_count: bucket_count(minutes, interval),
        }
    }
}

/// Buckets needed to cover `minutes`, 0 for empty or negative ranges.
pub fn bucket_count(minutes: i64, interval: Interval) -> u64 {
    if minutes <= 0 {
        return 0;
    }
    (minutes as u64).div_ceil(interval.minutes())
}

/// Resolves ranges with a configured default period and diagnostic hook.
#[derive(Clone)]
pub struct Resolver {
    default_period: String,
    hook: Arc<dyn DiagnosticHook>,
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("default_period", &self.default_period)
            .finish_non_exhaustive()
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self {
            default_period: DEFAULT_STATS_PERIOD.to_string(),
            hook: Arc::new(TracingHook),
        }
    }
}

impl Resolver {
    /// Create a resolver from settings.
    pub fn new(settings: &Settings) -> Self {
        Self {
            default_period: settings.default_period.clone(),
            ..Default::default()
        }
    }

    /// Replace the diagnostic hook.
    pub fn with_hook(mut self, hook: Arc<dyn DiagnosticHook>) -> Self {
        self.hook = hook;
        self
    }

    /// The period used for ranges without bounds or period.
    pub fn default_period(&self) -> &str {
        &self.default_period
    }

    /// Length of a range in whole minutes.
    pub fn diff_in_minutes(&self, range: &TimeRange) -> Result<i64> {
        diff_with_default(range, &self.default_period)
    }

    /// Bucket size for `range` under a fidelity profile.
    pub fn interval(&self, range: &TimeRange, fidelity: Fidelity) -> Result<Interval> {
        Ok(self.resolve(range, fidelity)?.interval)
    }

    /// Bucket size for `range` on the events series API.
    pub fn series_api_interval(&self, range: &TimeRange) -> Result<Interval> {
        Ok(self.resolve_series_api(range)?.interval)
    }

    /// Resolve a range under a fidelity profile.
    pub fn resolve(&self, range: &TimeRange, fidelity: Fidelity) -> Result<Resolution> {
        self.resolve_on(range, Some(fidelity), profiles::ladder(fidelity))
    }

    /// Resolve a range on the series API ladder.
    pub fn resolve_series_api(&self, range: &TimeRange) -> Result<Resolution> {
        self.resolve_on(range, None, profiles::series_api_ladder())
    }

    /// Resolve a range under every fidelity profile.
    pub fn resolve_all(&self, range: &TimeRange) -> Result<Vec<Resolution>> {
        let minutes = self.diff_in_minutes(range)?;
        Ok(Fidelity::ALL
            .into_iter()
            .map(|fidelity| {
                let interval = profiles::ladder(fidelity).interval_for_with(minutes, &*self.hook);
                Resolution::new(Some(fidelity), minutes, interval)
            })
            .collect())
    }

    fn resolve_on(
        &self,
        range: &TimeRange,
        fidelity: Option<Fidelity>,
        ladder: &GranularityLadder,
    ) -> Result<Resolution> {
        let minutes = self.diff_in_minutes(range)?;
        let interval = ladder.interval_for_with(minutes, &*self.hook);
        debug!(minutes, %interval, ?fidelity, "Resolved interval");
        Ok(Resolution::new(fidelity, minutes, interval))
    }
}
