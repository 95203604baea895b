//! Runtime settings.
//!
//! Loaded from an optional file (TOML, JSON or YAML by extension), then
//! overridden by `BUCKETRY_*` environment variables.

use std::path::Path;

use bucketry_types::Fidelity;
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::Result;
use crate::period::{parse_period, DEFAULT_STATS_PERIOD};

/// Settings shared by the library resolver and the CLI.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Period used for ranges with neither bounds nor a period.
    pub default_period: String,
    /// Profile used when the caller does not name one.
    pub default_fidelity: Fidelity,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_period: DEFAULT_STATS_PERIOD.to_string(),
            default_fidelity: Fidelity::default(),
            log_filter: "warn".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from `path` (if any) and the environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        let settings = Self::from_config(
            builder
                .add_source(Environment::with_prefix("BUCKETRY"))
                .build()?,
        )?;
        Ok(settings)
    }

    fn from_config(config: Config) -> Result<Self> {
        let settings: Settings = config.try_deserialize()?;
        parse_period(&settings.default_period)?;
        Ok(settings)
    }
}
