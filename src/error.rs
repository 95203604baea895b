//! Error types for granularity resolution.

use thiserror::Error;

/// Errors that can occur while building ladders or resolving intervals.
#[derive(Debug, Error)]
pub enum Error {
    /// A ladder was built without a fallback step.
    #[error("At least one step in the ladder must start at 0")]
    MissingZeroStep,

    /// A period shorthand could not be parsed.
    #[error("Invalid period: {0:?}")]
    InvalidPeriod(String),

    /// Settings could not be loaded.
    #[error("Failed to load settings: {0}")]
    Config(#[from] config::ConfigError),
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
