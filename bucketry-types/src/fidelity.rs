//! Named fidelity profiles.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

/// How aggressively a feature buckets time.
///
/// Each profile maps to one granularity ladder. Issue lists use coarser
/// buckets than span latency charts, for example.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Fidelity {
    High,
    #[default]
    Medium,
    Low,
    Metrics,
    Issues,
    Spans,
    SpansLow,
}

impl Fidelity {
    /// Every profile, finest first as listed in the product.
    pub const ALL: [Fidelity; 7] = [
        Fidelity::High,
        Fidelity::Medium,
        Fidelity::Low,
        Fidelity::Metrics,
        Fidelity::Issues,
        Fidelity::Spans,
        Fidelity::SpansLow,
    ];

    /// The profile's name as used in query strings and config files.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Fidelity::High => "high",
            Fidelity::Medium => "medium",
            Fidelity::Low => "low",
            Fidelity::Metrics => "metrics",
            Fidelity::Issues => "issues",
            Fidelity::Spans => "spans",
            Fidelity::SpansLow => "spans-low",
        }
    }
}

impl fmt::Display for Fidelity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const EXPECTED: &str = "high, medium, low, metrics, issues, spans, spans-low";

/// Error returned for an unknown fidelity name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFidelityError {
    input: String,
}

impl fmt::Display for ParseFidelityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown fidelity {:?} (expected one of: {})", self.input, EXPECTED)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseFidelityError {}

impl FromStr for Fidelity {
    type Err = ParseFidelityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Fidelity::ALL
            .into_iter()
            .find(|f| f.as_str() == s.trim())
            .ok_or_else(|| ParseFidelityError {
                input: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for fidelity in Fidelity::ALL {
            assert_eq!(fidelity.as_str().parse::<Fidelity>().unwrap(), fidelity);
        }
    }

    #[test]
    fn test_default_is_medium() {
        assert_eq!(Fidelity::default(), Fidelity::Medium);
    }

    #[test]
    fn test_unknown_name() {
        let err = "ultra".parse::<Fidelity>().unwrap_err();
        assert!(err.to_string().contains("ultra"));
        assert!("SpansLow".parse::<Fidelity>().is_err());
    }

    #[test]
    fn test_display_uses_kebab_case() {
        assert_eq!(Fidelity::SpansLow.to_string(), "spans-low");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Fidelity::SpansLow).unwrap();
        assert_eq!(json, "\"spans-low\"");
        let back: Fidelity = serde_json::from_str("\"issues\"").unwrap();
        assert_eq!(back, Fidelity::Issues);
    }
}
