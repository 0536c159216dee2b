//! Figment-backed configuration loader.
//!
//! Layering, lowest precedence first: built-in defaults, `hearth.yaml`
//! in the working directory, then `HEARTH_`-prefixed environment
//! variables (`__` separates nesting, e.g. `HEARTH_API__BASE_URL`).

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;
use tracing::debug;

use crate::domain::models::Config;

const CONFIG_FILE: &str = "hearth.yaml";
const ENV_PREFIX: &str = "HEARTH_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] figment::Error),

    #[error("api.base_url must not be empty")]
    EmptyBaseUrl,

    #[error("cache.stale_time_secs ({stale}) must not exceed cache.gc_time_secs ({gc})")]
    StaleExceedsGc { stale: u64, gc: u64 },

    #[error("retry.initial_backoff_ms ({initial}) must not exceed retry.max_backoff_ms ({max})")]
    BackoffOrdering { initial: u64, max: u64 },

    #[error("logging.level '{0}' is not one of trace, debug, info, warn, error")]
    BadLogLevel(String),

    #[error("logging.format '{0}' is not one of pretty, json")]
    BadLogFormat(String),
}

/// Loads and validates [`Config`].
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from the default layering.
    pub fn load() -> Result<Config, ConfigError> {
        Self::from_figment(
            Figment::from(Serialized::defaults(Config::default()))
                .merge(Yaml::file(CONFIG_FILE))
                .merge(Env::prefixed(ENV_PREFIX).split("__")),
        )
    }

    /// Load with an explicit YAML file instead of `hearth.yaml`.
    /// Environment variables still apply on top.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        Self::from_figment(
            Figment::from(Serialized::defaults(Config::default()))
                .merge(Yaml::file(path.as_ref()))
                .merge(Env::prefixed(ENV_PREFIX).split("__")),
        )
    }

    fn from_figment(figment: Figment) -> Result<Config, ConfigError> {
        let config: Config = figment.extract()?;
        Self::validate(&config)?;
        debug!(base_url = %config.api.base_url, "configuration loaded");
        Ok(config)
    }

    fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.api.base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if config.cache.stale_time_secs > config.cache.gc_time_secs {
            return Err(ConfigError::StaleExceedsGc {
                stale: config.cache.stale_time_secs,
                gc: config.cache.gc_time_secs,
            });
        }
        if config.retry.initial_backoff_ms > config.retry.max_backoff_ms {
            return Err(ConfigError::BackoffOrdering {
                initial: config.retry.initial_backoff_ms,
                max: config.retry.max_backoff_ms,
            });
        }
        match config.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => return Err(ConfigError::BadLogLevel(other.to_string())),
        }
        match config.logging.format.as_str() {
            "pretty" | "json" => {}
            other => return Err(ConfigError::BadLogFormat(other.to_string())),
        }
        Ok(())
    }
}
