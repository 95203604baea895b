//! Threshold tables that turn a duration into a bucket size.
//!
//! A [`GranularityLadder`] is a list of `(threshold, interval)` steps kept in
//! descending threshold order. A duration resolves to the interval of the
//! largest threshold not exceeding it. Every ladder has a step at 0, so any
//! non-negative duration resolves.

use bucketry_types::Interval;

use crate::diagnostics::{DiagnosticHook, TracingHook};
use crate::error::{Error, Result};

/// One rung of a ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GranularityStep {
    /// Minimum duration in minutes for which `interval` applies.
    pub threshold_minutes: u64,
    /// Bucket size used from this threshold up.
    pub interval: Interval,
}

impl GranularityStep {
    /// Create a step.
    pub const fn new(threshold_minutes: u64, interval: Interval) -> Self {
        Self {
            threshold_minutes,
            interval,
        }
    }
}

/// An immutable, descending-sorted table of granularity steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GranularityLadder {
    steps: Vec<GranularityStep>,
}

impl GranularityLadder {
    /// Build a ladder from steps in any order.
    ///
    /// Fails with [`Error::MissingZeroStep`] unless some step has a
    /// threshold of 0.
    pub fn new(steps: impl Into<Vec<GranularityStep>>) -> Result<Self> {
        let mut steps = steps.into();
        if !steps.iter().any(|s| s.threshold_minutes == 0) {
            return Err(Error::MissingZeroStep);
        }
        steps.sort_by(|a, b| b.threshold_minutes.cmp(&a.threshold_minutes));
        Ok(Self { steps })
    }

    /// Steps in descending threshold order.
    pub fn steps(&self) -> &[GranularityStep] {
        &self.steps
    }

    /// The finest interval, belonging to the smallest threshold.
    pub fn finest(&self) -> Interval {
        // Construction guarantees at least the zero step.
        self.steps[self.steps.len() - 1].interval
    }

    /// Resolve a duration, logging negative input through `tracing`.
    pub fn interval_for(&self, minutes: i64) -> Interval {
        self.interval_for_with(minutes, &TracingHook)
    }

    /// Resolve a duration, reporting negative input to `hook`.
    ///
    /// Negative durations resolve to [`finest`](Self::finest).
    pub fn interval_for_with(&self, minutes: i64, hook: &dyn DiagnosticHook) -> Interval {
        if minutes < 0 {
            hook.on_negative_duration(minutes);
            return self.finest();
        }

        let minutes = minutes as u64;
        self.steps
            .iter()
            .find(|step| step.threshold_minutes <= minutes)
            .map_or_else(|| self.finest(), |step| step.interval)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::diagnostics::testing::RecordingHook;

    fn medium() -> GranularityLadder {
        GranularityLadder::new([
            GranularityStep::new(86_400, Interval::days(1)),
            GranularityStep::new(43_200, Interval::hours(4)),
            GranularityStep::new(1_441, Interval::hours(1)),
            GranularityStep::new(61, Interval::mins(15)),
            GranularityStep::new(0, Interval::mins(5)),
        ])
        .unwrap()
    }

    #[test]
    fn test_sorts_unordered_steps() {
        let ladder = GranularityLadder::new(vec![
            GranularityStep::new(0, Interval::mins(1)),
            GranularityStep::new(1_440, Interval::hours(1)),
            GranularityStep::new(60, Interval::mins(5)),
        ])
        .unwrap();

        let thresholds: Vec<u64> = ladder
            .steps()
            .iter()
            .map(|s| s.threshold_minutes)
            .collect();
        assert_eq!(thresholds, vec![1_440, 60, 0]);
        assert_eq!(ladder.interval_for(100), Interval::mins(5));
    }

    #[test]
    fn test_missing_zero_step_fails() {
        let result = GranularityLadder::new([
            GranularityStep::new(60, Interval::mins(5)),
            GranularityStep::new(1, Interval::mins(1)),
        ]);
        assert!(matches!(result, Err(Error::MissingZeroStep)));
        assert!(GranularityLadder::new(Vec::<GranularityStep>::new()).is_err());
    }

    #[test]
    fn test_boundaries() {
        let ladder = medium();
        assert_eq!(ladder.interval_for(86_400), Interval::days(1));
        assert_eq!(ladder.interval_for(86_399), Interval::hours(4));
        assert_eq!(ladder.interval_for(1_441), Interval::hours(1));
        assert_eq!(ladder.interval_for(1_440), Interval::mins(15));
        assert_eq!(ladder.interval_for(61), Interval::mins(15));
        assert_eq!(ladder.interval_for(60), Interval::mins(5));
        assert_eq!(ladder.interval_for(0), Interval::mins(5));
    }

    #[test]
    fn test_negative_falls_back_to_finest() {
        let hook = RecordingHook::default();
        let ladder = medium();

        assert_eq!(ladder.interval_for_with(-5, &hook), Interval::mins(5));
        assert_eq!(hook.reported(), vec![-5]);
    }

    #[test]
    fn test_non_negative_input_is_not_reported() {
        let hook = RecordingHook::default();
        medium().interval_for_with(0, &hook);
        medium().interval_for_with(100_000, &hook);
        assert!(hook.reported().is_empty());
    }

    #[test]
    fn test_finest_is_zero_step() {
        assert_eq!(medium().finest(), Interval::mins(5));
    }

    fn arb_ladder() -> impl Strategy<Value = GranularityLadder> {
        prop::collection::vec((1u64..200_000, 1u32..120), 0..10).prop_map(|rungs| {
            let mut steps: Vec<GranularityStep> = rungs
                .into_iter()
                .map(|(threshold, count)| GranularityStep::new(threshold, Interval::mins(count)))
                .collect();
            steps.push(GranularityStep::new(0, Interval::mins(1)));
            GranularityLadder::new(steps).unwrap()
        })
    }

    fn selected_threshold(ladder: &GranularityLadder, minutes: u64) -> u64 {
        ladder
            .steps()
            .iter()
            .find(|s| s.threshold_minutes <= minutes)
            .map(|s| s.threshold_minutes)
            .unwrap()
    }

    proptest! {
        #[test]
        fn test_steps_are_sorted_descending(ladder in arb_ladder()) {
            for pair in ladder.steps().windows(2) {
                prop_assert!(pair[0].threshold_minutes >= pair[1].threshold_minutes);
            }
        }

        #[test]
        fn test_every_non_negative_duration_resolves(
            ladder in arb_ladder(),
            minutes in 0i64..1_000_000,
        ) {
            let interval = ladder.interval_for_with(minutes, &crate::diagnostics::SilentHook);
            prop_assert!(ladder.steps().iter().any(|s| s.interval == interval));
        }

        #[test]
        fn test_larger_durations_never_pick_smaller_thresholds(
            ladder in arb_ladder(),
            a in 0u64..1_000_000,
            b in 0u64..1_000_000,
        ) {
            let (small, large) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(
                selected_threshold(&ladder, large) >= selected_threshold(&ladder, small)
            );
        }

        #[test]
        fn test_picks_largest_threshold_not_exceeding_input(
            ladder in arb_ladder(),
            minutes in 0u64..1_000_000,
        ) {
            let expected = ladder
                .steps()
                .iter()
                .filter(|s| s.threshold_minutes <= minutes)
                .map(|s| s.threshold_minutes)
                .max()
                .unwrap();
            prop_assert_eq!(selected_threshold(&ladder, minutes), expected);
        }
    }
}
