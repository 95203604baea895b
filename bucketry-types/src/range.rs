//! Time ranges as selected in a date picker or query string.

use alloc::string::String;

/// Milliseconds since the Unix epoch.
///
/// Both ends of an absolute range are compared in this representation, so
/// differences are plain durations with no timezone artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EpochMillis(pub i64);

impl EpochMillis {
    /// Create from milliseconds.
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Create from seconds, saturating at the bounds of `i64` milliseconds.
    pub const fn from_secs(secs: i64) -> Self {
        Self(secs.saturating_mul(1000))
    }

    /// Get the value in milliseconds.
    pub const fn as_millis(&self) -> i64 {
        self.0
    }

    /// Signed difference `self - earlier` in whole minutes, truncated toward zero.
    pub const fn minutes_since(&self, earlier: EpochMillis) -> i64 {
        // The widest i64 span is under 2^64 ms, i.e. ~3.1e14 minutes, so the
        // quotient always fits back in i64.
        ((self.0 as i128 - earlier.0 as i128) / 60_000) as i64
    }
}

/// A requested time range.
///
/// Either a relative `period` shorthand (`"24h"`, `"90d"`) or an absolute
/// `start`/`end` pair. When both `start` and `end` are set they win over
/// `period`; a lone `start` or `end` is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeRange {
    /// Relative period shorthand.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub period: Option<String>,

    /// Absolute range start.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub start: Option<EpochMillis>,

    /// Absolute range end.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub end: Option<EpochMillis>,
}

impl TimeRange {
    /// A relative range such as `"14d"`.
    pub fn period(period: impl Into<String>) -> Self {
        Self {
            period: Some(period.into()),
            ..Default::default()
        }
    }

    /// An absolute range.
    pub fn absolute(start: EpochMillis, end: EpochMillis) -> Self {
        Self {
            period: None,
            start: Some(start),
            end: Some(end),
        }
    }

    /// Set the relative period, keeping any absolute bounds.
    pub fn with_period(mut self, period: impl Into<String>) -> Self {
        self.period = Some(period.into());
        self
    }

    /// The absolute bounds, if both are present.
    pub fn bounds(&self) -> Option<(EpochMillis, EpochMillis)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_since_truncates() {
        let start = EpochMillis::from_secs(1_000);
        assert_eq!(EpochMillis::from_secs(1_000 + 3_600).minutes_since(start), 60);
        assert_eq!(
            EpochMillis::from_millis(1_000_000 + 119_999).minutes_since(start),
            1
        );
        assert_eq!(EpochMillis::from_secs(1_000 - 90).minutes_since(start), -1);
    }

    #[test]
    fn test_minutes_since_extreme_bounds() {
        let min = EpochMillis(i64::MIN);
        let max = EpochMillis(i64::MAX);
        let widest = ((i64::MAX as i128 - i64::MIN as i128) / 60_000) as i64;

        assert_eq!(max.minutes_since(min), widest);
        assert!(max.minutes_since(min) > 0);
        assert_eq!(min.minutes_since(max), -widest);
        assert!(min.minutes_since(max) < 0);
        assert_eq!(max.minutes_since(max), 0);
    }

    #[test]
    fn test_from_secs_saturates() {
        assert_eq!(EpochMillis::from_secs(i64::MAX), EpochMillis(i64::MAX));
        assert_eq!(EpochMillis::from_secs(i64::MIN), EpochMillis(i64::MIN));
        assert_eq!(EpochMillis::from_secs(-2).as_millis(), -2_000);
    }

    #[test]
    fn test_bounds_require_both_ends() {
        let mut range = TimeRange::period("24h");
        assert_eq!(range.bounds(), None);

        range.start = Some(EpochMillis(0));
        assert_eq!(range.bounds(), None);

        range.end = Some(EpochMillis(60_000));
        assert_eq!(range.bounds(), Some((EpochMillis(0), EpochMillis(60_000))));
    }

    #[test]
    fn test_absolute_with_period_keeps_both() {
        let range = TimeRange::absolute(EpochMillis(0), EpochMillis(1)).with_period("1h");
        assert_eq!(range.period.as_deref(), Some("1h"));
        assert!(range.bounds().is_some());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_skips_missing_fields() {
        let json = serde_json::to_string(&TimeRange::period("7d")).unwrap();
        assert_eq!(json, r#"{"period":"7d"}"#);

        let range: TimeRange = serde_json::from_str(r#"{"start":0,"end":60000}"#).unwrap();
        assert_eq!(range.bounds(), Some((EpochMillis(0), EpochMillis(60_000))));
        assert_eq!(range.period, None);
    }
}
