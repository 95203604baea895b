//! Bucket sizes for time-series charts.
//!
//! An [`Interval`] is the span of time represented by one data point, written
//! the way chart and query APIs expect it: `"1m"`, `"15m"`, `"4h"`, `"1d"`.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;
use core::time::Duration;

/// Unit of an [`Interval`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IntervalUnit {
    Minute,
    Hour,
    Day,
    Week,
}

impl IntervalUnit {
    /// Length of one unit in minutes.
    pub const fn minutes(&self) -> u64 {
        match self {
            IntervalUnit::Minute => 1,
            IntervalUnit::Hour => 60,
            IntervalUnit::Day => 1_440,
            IntervalUnit::Week => 10_080,
        }
    }

    /// Label suffix for this unit.
    pub const fn suffix(&self) -> &'static str {
        match self {
            IntervalUnit::Minute => "m",
            IntervalUnit::Hour => "h",
            IntervalUnit::Day => "d",
            IntervalUnit::Week => "w",
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "m" => Some(IntervalUnit::Minute),
            "h" => Some(IntervalUnit::Hour),
            "d" => Some(IntervalUnit::Day),
            "w" => Some(IntervalUnit::Week),
            _ => None,
        }
    }
}

/// A time-series bucket size such as `5m` or `1d`.
///
/// Intervals compare by their length in time, so `60m` and `1h` are
/// different values (different labels) but `1h < 1d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Interval {
    count: u32,
    unit: IntervalUnit,
}

impl Interval {
    /// Create an interval of `count` units.
    ///
    /// # Panics
    ///
    /// Panics if `count` is zero. Use [`Interval::try_new`] for untrusted input.
    pub const fn new(count: u32, unit: IntervalUnit) -> Self {
        assert!(count > 0, "interval count must be positive");
        Self { count, unit }
    }

    /// Create an interval, returning `None` for a zero count.
    pub const fn try_new(count: u32, unit: IntervalUnit) -> Option<Self> {
        if count == 0 {
            None
        } else {
            Some(Self { count, unit })
        }
    }

    /// `count` minutes.
    pub const fn mins(count: u32) -> Self {
        Self::new(count, IntervalUnit::Minute)
    }

    /// `count` hours.
    pub const fn hours(count: u32) -> Self {
        Self::new(count, IntervalUnit::Hour)
    }

    /// `count` days.
    pub const fn days(count: u32) -> Self {
        Self::new(count, IntervalUnit::Day)
    }

    /// `count` weeks.
    pub const fn weeks(count: u32) -> Self {
        Self::new(count, IntervalUnit::Week)
    }

    /// Number of units.
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// The unit.
    pub const fn unit(&self) -> IntervalUnit {
        self.unit
    }

    /// Length of the interval in minutes.
    pub const fn minutes(&self) -> u64 {
        self.count as u64 * self.unit.minutes()
    }

    /// Length of the interval as a standard Duration.
    pub const fn to_duration(&self) -> Duration {
        Duration::from_secs(self.minutes() * 60)
    }
}

impl PartialOrd for Interval {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Interval {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.minutes()
            .cmp(&other.minutes())
            .then(self.unit.cmp(&other.unit))
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.count, self.unit.suffix())
    }
}

/// Error returned when an interval label cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIntervalError {
    input: String,
}

impl ParseIntervalError {
    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseIntervalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid interval: {:?}", self.input)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseIntervalError {}

impl FromStr for Interval {
    type Err = ParseIntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseIntervalError {
            input: s.to_string(),
        };
        let trimmed = s.trim();
        let split = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(err)?;
        let (digits, suffix) = trimmed.split_at(split);
        let count: u32 = digits.parse().map_err(|_| err())?;
        let unit = IntervalUnit::from_suffix(suffix).ok_or_else(err)?;
        Self::try_new(count, unit).ok_or_else(err)
    }
}

impl TryFrom<String> for Interval {
    type Error = ParseIntervalError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Interval> for String {
    fn from(interval: Interval) -> Self {
        interval.to_string()
    }
}
