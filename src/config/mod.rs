//! Engine configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates, following a `DAILYWHY__SECTION__KEY`
//! naming scheme. Every value has a default, so `EngineConfig::default()`
//! reproduces the stock scoring behavior with no environment at all.

mod scoring;

pub use scoring::ScoringTunables;

use serde::Deserialize;
use thiserror::Error;

/// Error raised while loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load engine configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// Root engine configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
    /// Scoring pipeline tunables (weights, spread threshold, reassignment).
    #[serde(default)]
    pub scoring: ScoringTunables,
}

impl EngineConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads a `.env` file if present, then environment variables with the
    /// `DAILYWHY` prefix and `__` separating nested keys, e.g.
    /// `DAILYWHY__SCORING__SPREAD_THRESHOLD=20`.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DAILYWHY")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }
}
