//! Relative period shorthand such as `"24h"` or `"90d"`.

use std::time::Duration;

use crate::error::{Error, Result};

/// Period used when a range has neither bounds nor a period.
pub const DEFAULT_STATS_PERIOD: &str = "14d";

/// Suffix to seconds multiplier.
const UNITS: &[(&str, u64)] = &[
    ("s", 1),
    ("m", 60),
    ("h", 3_600),
    ("d", 86_400),
    ("w", 604_800),
];

/// Parse period strings like "45m", "24h", "90d", "2w".
///
/// A bare number is read as seconds.
pub fn parse_period(s: &str) -> Result<Duration> {
    let trimmed = s.trim();
    let invalid = || Error::InvalidPeriod(s.to_string());

    let (digits, multiplier) = UNITS
        .iter()
        .find_map(|(suffix, multiplier)| {
            trimmed
                .strip_suffix(suffix)
                .map(|digits| (digits, *multiplier))
        })
        .unwrap_or((trimmed, 1));

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let value: u64 = digits.parse().map_err(|_| invalid())?;
    let secs = value.checked_mul(multiplier).ok_or_else(invalid)?;
    Ok(Duration::from_secs(secs))
}

/// Length of a period in hours.
pub fn period_to_hours(s: &str) -> Result<f64> {
    Ok(parse_period(s)?.as_secs_f64() / 3_600.0)
}
