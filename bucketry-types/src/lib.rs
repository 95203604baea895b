//! # bucketry-types
//!
//! Core types for time-series bucketing. These are the values that flow
//! between a date picker, the granularity resolver and a chart or query API:
//! the requested [`TimeRange`], the [`Fidelity`] profile a feature asks for,
//! and the resulting bucket [`Interval`].
//!
//! ## Design Goals
//!
//! - **Zero required dependencies**: Core types work without any serialization framework
//! - **Optional serialization**: Enable `serde` when ranges or intervals travel as JSON
//! - **Label-compatible**: Intervals display and parse as query API labels (`"5m"`, `"1d"`)
//! - **Closed profile set**: Fidelity is an enum, so profile lookups are checked at compile time
//!
//! ## Features
//!
//! - `std` (default): Standard library support
//! - `serde`: JSON/TOML/etc. serialization via serde
//!
//! ## Example
//!
//! ```rust
//! use bucketry_types::{EpochMillis, Fidelity, Interval, TimeRange};
//!
//! let relative = TimeRange::period("24h");
//! assert!(relative.bounds().is_none());
//!
//! let absolute = TimeRange::absolute(EpochMillis::from_secs(0), EpochMillis::from_secs(3_600));
//! assert_eq!(absolute.bounds().map(|(s, e)| e.minutes_since(s)), Some(60));
//!
//! let interval: Interval = "15m".parse().unwrap();
//! assert_eq!(interval.minutes(), 15);
//! assert_eq!("spans-low".parse::<Fidelity>().unwrap(), Fidelity::SpansLow);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod fidelity;
mod interval;
mod range;

pub use fidelity::*;
pub use interval::*;
pub use range::*;
