//! Ladder tables for every fidelity profile.
//!
//! The thresholds and labels here must match the bucket sizes the metrics
//! and events backends pre-aggregate at. A mismatch shows up as gaps or
//! misaligned tooltips in charts.

use std::sync::LazyLock;

use bucketry_types::{Fidelity, Interval};

use crate::ladder::{GranularityLadder, GranularityStep};

/// Durations in minutes used as ladder thresholds.
pub mod thresholds {
    pub const ONE_HOUR: u64 = 60;
    pub const ONE_HOUR_AND_ONE_MINUTE: u64 = ONE_HOUR + 1;
    pub const SIX_HOURS: u64 = 6 * ONE_HOUR;
    pub const TWENTY_FOUR_HOURS: u64 = 24 * ONE_HOUR;
    pub const ONE_DAY_AND_ONE_MINUTE: u64 = TWENTY_FOUR_HOURS + 1;
    pub const TWO_DAYS: u64 = 2 * TWENTY_FOUR_HOURS;
    pub const ONE_WEEK: u64 = 7 * TWENTY_FOUR_HOURS;
    pub const TWO_WEEKS: u64 = 14 * TWENTY_FOUR_HOURS;
    pub const THIRTY_DAYS: u64 = 30 * TWENTY_FOUR_HOURS;
    pub const SIXTY_DAYS: u64 = 60 * TWENTY_FOUR_HOURS;
}

use self::thresholds::*;

const fn step(threshold_minutes: u64, interval: Interval) -> GranularityStep {
    GranularityStep::new(threshold_minutes, interval)
}

const HIGH_STEPS: &[GranularityStep] = &[
    step(SIXTY_DAYS, Interval::hours(4)),
    step(THIRTY_DAYS, Interval::hours(1)),
    step(ONE_DAY_AND_ONE_MINUTE, Interval::mins(30)),
    step(ONE_HOUR_AND_ONE_MINUTE, Interval::mins(5)),
    step(0, Interval::mins(1)),
];

const MEDIUM_STEPS: &[GranularityStep] = &[
    step(SIXTY_DAYS, Interval::days(1)),
    step(THIRTY_DAYS, Interval::hours(4)),
    step(ONE_DAY_AND_ONE_MINUTE, Interval::hours(1)),
    step(ONE_HOUR_AND_ONE_MINUTE, Interval::mins(15)),
    step(0, Interval::mins(5)),
];

const LOW_STEPS: &[GranularityStep] = &[
    step(SIXTY_DAYS, Interval::days(2)),
    step(THIRTY_DAYS, Interval::days(1)),
    step(TWO_WEEKS, Interval::hours(12)),
    step(ONE_DAY_AND_ONE_MINUTE, Interval::hours(6)),
    step(ONE_HOUR_AND_ONE_MINUTE, Interval::hours(1)),
    step(0, Interval::mins(10)),
];

const METRICS_STEPS: &[GranularityStep] = &[
    step(SIXTY_DAYS, Interval::days(1)),
    step(THIRTY_DAYS, Interval::hours(12)),
    step(TWO_WEEKS, Interval::hours(4)),
    step(TWENTY_FOUR_HOURS, Interval::mins(30)),
    step(SIX_HOURS, Interval::mins(5)),
    step(ONE_HOUR, Interval::mins(1)),
    step(0, Interval::mins(1)),
];

const ISSUES_STEPS: &[GranularityStep] = &[
    step(SIXTY_DAYS, Interval::days(1)),
    step(THIRTY_DAYS, Interval::hours(12)),
    step(TWO_WEEKS, Interval::hours(4)),
    step(ONE_WEEK, Interval::hours(2)),
    step(TWO_DAYS, Interval::hours(1)),
    step(TWENTY_FOUR_HOURS, Interval::mins(20)),
    step(SIX_HOURS, Interval::mins(5)),
    step(ONE_HOUR, Interval::mins(1)),
    step(0, Interval::mins(1)),
];

const SPANS_STEPS: &[GranularityStep] = &[
    step(SIXTY_DAYS, Interval::days(1)),
    step(THIRTY_DAYS, Interval::hours(12)),
    step(TWO_WEEKS, Interval::hours(4)),
    step(ONE_WEEK, Interval::hours(2)),
    step(TWO_DAYS, Interval::mins(30)),
    step(TWENTY_FOUR_HOURS, Interval::mins(15)),
    step(SIX_HOURS, Interval::mins(15)),
    step(ONE_HOUR, Interval::mins(5)),
    step(0, Interval::mins(1)),
];

const SPANS_LOW_STEPS: &[GranularityStep] = &[
    step(THIRTY_DAYS, Interval::days(1)),
    step(TWO_WEEKS, Interval::hours(12)),
    step(ONE_WEEK, Interval::hours(4)),
    step(TWO_DAYS, Interval::hours(2)),
    step(TWENTY_FOUR_HOURS, Interval::hours(1)),
    step(SIX_HOURS, Interval::mins(30)),
    step(ONE_HOUR, Interval::mins(10)),
    step(0, Interval::mins(5)),
];

// The series API cannot aggregate below 5m and only uses sub-hour buckets
// for ranges under six hours.
const SERIES_API_STEPS: &[GranularityStep] = &[
    step(SIXTY_DAYS, Interval::days(1)),
    step(THIRTY_DAYS, Interval::hours(4)),
    step(SIX_HOURS, Interval::hours(1)),
    step(0, Interval::mins(5)),
];

fn build(steps: &'static [GranularityStep]) -> GranularityLadder {
    // Static tables; a missing zero step is a defect in this file.
    match GranularityLadder::new(steps) {
        Ok(ladder) => ladder,
        Err(e) => panic!("invalid built-in ladder: {e}"),
    }
}

static HIGH: LazyLock<GranularityLadder> = LazyLock::new(|| build(HIGH_STEPS));
static MEDIUM: LazyLock<GranularityLadder> = LazyLock::new(|| build(MEDIUM_STEPS));
static LOW: LazyLock<GranularityLadder> = LazyLock::new(|| build(LOW_STEPS));
static METRICS: LazyLock<GranularityLadder> = LazyLock::new(|| build(METRICS_STEPS));
static ISSUES: LazyLock<GranularityLadder> = LazyLock::new(|| build(ISSUES_STEPS));
static SPANS: LazyLock<GranularityLadder> = LazyLock::new(|| build(SPANS_STEPS));
static SPANS_LOW: LazyLock<GranularityLadder> = LazyLock::new(|| build(SPANS_LOW_STEPS));
static SERIES_API: LazyLock<GranularityLadder> = LazyLock::new(|| build(SERIES_API_STEPS));

/// The ladder backing a fidelity profile.
pub fn ladder(fidelity: Fidelity) -> &'static GranularityLadder {
    match fidelity {
        Fidelity::High => &*HIGH,
        Fidelity::Medium => &*MEDIUM,
        Fidelity::Low => &*LOW,
        Fidelity::Metrics => &*METRICS,
        Fidelity::Issues => &*ISSUES,
        Fidelity::Spans => &*SPANS,
        Fidelity::SpansLow => &*SPANS_LOW,
    }
}

/// The dedicated ladder for the events series API.
pub fn series_api_ladder() -> &'static GranularityLadder {
    &*SERIES_API
}
