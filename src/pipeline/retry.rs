//! Bounded-attempt, exponential-backoff retry around the inference call.
//!
//! Only failures plausibly caused by transient upstream load are retried.
//! Network-level failures are rethrown immediately: they are unlikely to
//! self-resolve inside a user-facing request window, and the attempt
//! budget is better spent reaching demo fallback sooner.

use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;

use crate::classify::{classify, ErrorKind};
use crate::error::Result;
use crate::types::config::PipelineConfig;

/// Retry controller for one pipeline run.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    max_retries: u32,
    backoff_base: Duration,
    backoff_cap: Duration,
}

impl RetryPolicy {
    /// Create a policy with an explicit budget and backoff window.
    pub fn new(max_retries: u32, backoff_base: Duration, backoff_cap: Duration) -> Self {
        Self {
            max_retries,
            backoff_base,
            backoff_cap,
        }
    }

    /// Build the policy a config describes.
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(
            config.max_retries,
            config.backoff_base(),
            config.backoff_cap(),
        )
    }

    /// Delay before retrying after the given 0-based attempt:
    /// `min(base * 2^attempt, cap)`.
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        self.backoff_base
            .saturating_mul(2u32.saturating_pow(attempt))
            .min(self.backoff_cap)
    }

    /// Run `operation` up to `max_retries + 1` times.
    ///
    /// Network-classified failures and the last attempt's failure are
    /// returned as-is; everything else sleeps the backoff delay and
    /// retries. The operation's own timeout bounds each attempt.
    pub async fn run<T, F, Fut>(&self, mut operation: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut attempt = 0u32;
        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(err) => {
                    let kind = classify(&err);
                    if kind == ErrorKind::Network {
                        tracing::warn!(
                            error = %err,
                            attempt = attempt + 1,
                            "network failure from inference service, not retrying"
                        );
                        return Err(err);
                    }
                    if attempt >= self.max_retries {
                        tracing::error!(
                            error = %err,
                            attempts = attempt + 1,
                            "inference failed after all attempts"
                        );
                        return Err(err);
                    }
                    let delay = self.backoff_delay(attempt);
                    tracing::warn!(
                        error = %err,
                        kind = ?kind,
                        attempt = attempt + 1,
                        delay_ms = delay.as_millis() as u64,
                        "inference attempt failed, retrying"
                    );
                    sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&PipelineConfig::default())
    }
}
