//! Retry policy with exponential backoff for transient request failures.
//!
//! Backoff doubles with each attempt (base × 2^attempt) up to a cap.
//! Client errors (4xx) are never retried; see
//! [`crate::domain::errors::ApiError::is_transient`].

use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, warn};

use crate::domain::errors::{ApiError, ApiResult};
use crate::domain::models::RetryConfig;

/// Bounded exponential-backoff retry for API calls.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Retry attempts after the initial request. Zero disables retry.
    max_retries: u32,
    initial_backoff_ms: u64,
    max_backoff_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&RetryConfig::default())
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32, initial_backoff_ms: u64, max_backoff_ms: u64) -> Self {
        debug_assert!(initial_backoff_ms <= max_backoff_ms);
        Self {
            max_retries,
            initial_backoff_ms,
            max_backoff_ms,
        }
    }

    pub fn from_config(config: &RetryConfig) -> Self {
        Self::new(
            config.max_retries,
            config.initial_backoff_ms,
            config.max_backoff_ms,
        )
    }

    /// A policy that never retries, useful in tests and for endpoints
    /// where retrying would duplicate a write.
    pub fn none() -> Self {
        Self::new(0, 1, 1)
    }

    /// Backoff before retry number `attempt` (zero-based), capped.
    fn backoff(&self, attempt: u32) -> Duration {
        let exp = self
            .initial_backoff_ms
            .saturating_mul(1u64 << attempt.min(16));
        Duration::from_millis(exp.min(self.max_backoff_ms))
    }

    /// Run `operation`, retrying transient failures with backoff.
    ///
    /// `operation` is called once per attempt so the request is rebuilt
    /// fresh each time.
    pub async fn execute<T, F, Fut>(&self, mut operation: F) -> ApiResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = ApiResult<T>>,
    {
        let mut attempt = 0u32;
        loop {
            match operation().await {
                Ok(value) => {
                    if attempt > 0 {
                        debug!(attempt, "request succeeded after retry");
                    }
                    return Ok(value);
                }
                Err(error) if error.is_transient() && attempt < self.max_retries => {
                    let delay = self.backoff(attempt);
                    warn!(
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        %error,
                        "transient request failure, backing off"
                    );
                    sleep(delay).await;
                    attempt += 1;
                }
                Err(error) => return Err(error),
            }
        }
    }
}
