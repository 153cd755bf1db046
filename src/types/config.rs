//! Configuration for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tunable limits for one pipeline instance.
///
/// The defaults reproduce the production policy: three total attempts,
/// 500ms doubling backoff capped at 2s, 10 MiB upload ceiling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Retries after the first attempt. Default: 2 (3 attempts total).
    pub max_retries: u32,

    /// First backoff delay, doubled per attempt. Default: 500ms.
    pub backoff_base_ms: u64,

    /// Ceiling on any single backoff delay. Default: 2000ms.
    pub backoff_cap_ms: u64,

    /// Maximum approximate decoded upload size. Default: 10 MiB.
    pub max_file_bytes: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_retries: 2,
            backoff_base_ms: 500,
            backoff_cap_ms: 2_000,
            max_file_bytes: 10 * 1024 * 1024,
        }
    }
}

impl PipelineConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the retry budget.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Set the backoff base delay.
    pub fn with_backoff_base(mut self, base: Duration) -> Self {
        self.backoff_base_ms = base.as_millis() as u64;
        self
    }

    /// Set the backoff ceiling.
    pub fn with_backoff_cap(mut self, cap: Duration) -> Self {
        self.backoff_cap_ms = cap.as_millis() as u64;
        self
    }

    /// Set the upload size limit in bytes.
    pub fn with_max_file_bytes(mut self, bytes: usize) -> Self {
        self.max_file_bytes = bytes;
        self
    }

    /// Backoff base as a `Duration`.
    pub fn backoff_base(&self) -> Duration {
        Duration::from_millis(self.backoff_base_ms)
    }

    /// Backoff ceiling as a `Duration`.
    pub fn backoff_cap(&self) -> Duration {
        Duration::from_millis(self.backoff_cap_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_production_policy() {
        let config = PipelineConfig::default();
        assert_eq!(config.max_retries, 2);
        assert_eq!(config.backoff_base(), Duration::from_millis(500));
        assert_eq!(config.backoff_cap(), Duration::from_millis(2_000));
        assert_eq!(config.max_file_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn test_builder() {
        let config = PipelineConfig::new()
            .with_max_retries(5)
            .with_backoff_base(Duration::from_millis(100))
            .with_max_file_bytes(1024);
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.backoff_base_ms, 100);
        assert_eq!(config.max_file_bytes, 1024);
    }
}
