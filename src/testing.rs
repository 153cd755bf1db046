//! Testing utilities including mock implementations.
//!
//! These are useful for testing applications that use the pipeline
//! without making real inference or network calls.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, RwLock};

use crate::error::{ExtractionError, Result};
use crate::traits::inference::Inference;
use crate::traits::normalizer::{AddressNormalizer, NormalizedAddress};

/// A mock inference service for testing.
///
/// Plays back a scripted sequence of responses and failures, then falls
/// through to an optional default. Failure messages are surfaced as
/// [`ExtractionError::Inference`] verbatim, so tests can exercise the
/// classifier with realistic upstream wording.
///
/// Clones share the same script and call log, so a test can keep a handle
/// for assertions after moving the mock into a pipeline.
#[derive(Clone, Default)]
pub struct MockInference {
    /// Scripted replies, consumed front to back.
    script: Arc<Mutex<VecDeque<std::result::Result<String, String>>>>,

    /// Returned once the script is exhausted.
    default_response: Arc<RwLock<Option<String>>>,

    /// Call tracking for assertions.
    calls: Arc<Mutex<Vec<MockInferenceCall>>>,
}

/// Record of a call made to the mock inference service.
#[derive(Debug, Clone)]
pub struct MockInferenceCall {
    pub data_url: String,
    pub instructions_len: usize,
}

impl MockInference {
    /// Create a new mock with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response.
    pub fn with_response(self, text: impl Into<String>) -> Self {
        self.script.lock().unwrap().push_back(Ok(text.into()));
        self
    }

    /// Queue a failure with the given upstream message.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.script.lock().unwrap().push_back(Err(message.into()));
        self
    }

    /// Set the response returned once the script is exhausted.
    pub fn with_default_response(self, text: impl Into<String>) -> Self {
        *self.default_response.write().unwrap() = Some(text.into());
        self
    }

    /// All calls made to this mock.
    pub fn calls(&self) -> Vec<MockInferenceCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of calls made to this mock.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Inference for MockInference {
    async fn infer(&self, data_url: &str, instructions: &str) -> Result<String> {
        self.calls.lock().unwrap().push(MockInferenceCall {
            data_url: data_url.to_string(),
            instructions_len: instructions.len(),
        });

        if let Some(scripted) = self.script.lock().unwrap().pop_front() {
            return scripted.map_err(ExtractionError::Inference);
        }

        self.default_response
            .read()
            .unwrap()
            .clone()
            .ok_or_else(|| ExtractionError::Inference("no scripted response".to_string()))
    }
}

/// A mock address normalizer for testing.
///
/// Returns predefined components for known raw strings and `None`
/// otherwise, like a real parser that misses.
#[derive(Clone, Default)]
pub struct MockNormalizer {
    addresses: Arc<RwLock<HashMap<String, NormalizedAddress>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockNormalizer {
    /// Create a new mock that parses nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a predefined parse for a raw address string.
    pub fn with_address(self, raw: impl Into<String>, parsed: NormalizedAddress) -> Self {
        self.addresses.write().unwrap().insert(raw.into(), parsed);
        self
    }

    /// Raw strings this mock was asked to normalize.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl AddressNormalizer for MockNormalizer {
    fn normalize(&self, raw: &str) -> Option<NormalizedAddress> {
        self.calls.lock().unwrap().push(raw.to_string());
        self.addresses.read().unwrap().get(raw).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_inference_plays_script_in_order() {
        let mock = MockInference::new()
            .with_failure("rate limit")
            .with_response("{}");

        assert!(mock.infer("data:1", "i").await.is_err());
        assert_eq!(mock.infer("data:1", "i").await.unwrap(), "{}");
        assert_eq!(mock.call_count(), 2);
    }

    #[tokio::test]
    async fn test_mock_inference_falls_through_to_default() {
        let mock = MockInference::new().with_default_response("{\"a\":1}");
        assert_eq!(mock.infer("data:1", "i").await.unwrap(), "{\"a\":1}");
        assert_eq!(mock.infer("data:1", "i").await.unwrap(), "{\"a\":1}");
    }

    #[tokio::test]
    async fn test_mock_inference_exhausted_script_errors() {
        let mock = MockInference::new();
        let err = mock.infer("data:1", "i").await.unwrap_err();
        assert!(matches!(err, ExtractionError::Inference(_)));
    }

    #[test]
    fn test_mock_normalizer_hit_and_miss() {
        let parsed = NormalizedAddress {
            street: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip_code: "62701".to_string(),
        };
        let mock = MockNormalizer::new().with_address("1 Main St, Springfield", parsed.clone());

        assert_eq!(mock.normalize("1 Main St, Springfield"), Some(parsed));
        assert_eq!(mock.normalize("nowhere"), None);
        assert_eq!(mock.calls().len(), 2);
    }
}
