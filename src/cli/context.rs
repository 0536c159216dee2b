//! Shared command wiring.

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::adapters::http::{HttpAuthApi, HttpPropertyRepository, RetryPolicy};
use crate::adapters::storage::FileTokenStorage;
use crate::domain::models::Config;
use crate::services::{SearchOrchestrator, SessionStore};

/// Everything a command needs, built once per invocation.
pub struct AppContext {
    pub config: Config,
    pub orchestrator: SearchOrchestrator,
    pub session: SessionStore,
}

impl AppContext {
    /// Wire up the HTTP adapters, file storage, and services from an
    /// already-loaded config (the entry point loads it once, before the
    /// logging subscriber goes up).
    pub fn init(config: Config) -> Result<Self> {
        let storage = Arc::new(
            FileTokenStorage::open(&config.storage.path)
                .with_context(|| format!("opening session storage at {}", config.storage.path))?,
        );
        let retry = RetryPolicy::from_config(&config.retry);

        let repo = Arc::new(HttpPropertyRepository::new(
            &config.api,
            storage.clone(),
            retry.clone(),
        )?);
        let auth = Arc::new(HttpAuthApi::new(&config.api, retry)?);

        let orchestrator = SearchOrchestrator::new(repo, &config.cache);
        let session = SessionStore::new(auth, storage);

        Ok(Self {
            config,
            orchestrator,
            session,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{ApiConfig, StorageConfig};

    #[test]
    fn test_init_uses_the_config_it_is_given() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            api: ApiConfig {
                base_url: "http://localhost:9/api".to_string(),
                timeout_secs: 1,
            },
            storage: StorageConfig {
                path: dir
                    .path()
                    .join("session.json")
                    .to_string_lossy()
                    .into_owned(),
            },
            ..Config::default()
        };

        let ctx = AppContext::init(config.clone()).unwrap();
        assert_eq!(ctx.config, config);
    }
}
