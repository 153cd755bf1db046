//! OpenAI implementation of the Inference trait.
//!
//! A reference implementation using GPT-4o vision over the chat
//! completions API.
//!
//! # Example
//!
//! ```rust,ignore
//! use taxdoc::ai::OpenAiInference;
//! use taxdoc::{NoopNormalizer, Pipeline};
//!
//! let inference = OpenAiInference::from_env()?;
//! let pipeline = Pipeline::new(inference, NoopNormalizer);
//! ```

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::error::{ExtractionError, Result};
use crate::security::ApiKey;
use crate::traits::inference::Inference;

/// OpenAI-backed inference over the chat completions API.
///
/// Request errors are mapped to [`ExtractionError::Inference`] with the
/// transport message intact, so timeouts and connection failures carry
/// the signatures the classifier matches on.
#[derive(Clone)]
pub struct OpenAiInference {
    client: Client,
    api_key: ApiKey,
    model: String,
    base_url: String,
    timeout: Duration,
}

impl OpenAiInference {
    /// Create a client with the given API key.
    pub fn new(api_key: impl Into<ApiKey>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: "gpt-4o".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Create from the `OPENAI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(ApiKey::from_env("OPENAI_API_KEY")?))
    }

    /// Set the model (default: gpt-4o).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set a custom base URL (for Azure, proxies, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the per-call timeout (default: 30s).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl Inference for OpenAiInference {
    async fn infer(&self, data_url: &str, instructions: &str) -> Result<String> {
        let body = serde_json::json!({
            "model": self.model,
            "messages": [{
                "role": "user",
                "content": [
                    { "type": "text", "text": instructions },
                    { "type": "image_url", "image_url": { "url": data_url } }
                ]
            }],
            "temperature": 0.0,
        });

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(self.api_key.expose())
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| ExtractionError::Inference(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractionError::Inference(format!(
                "inference service returned {status}"
            )));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ExtractionError::Inference(e.to_string()))?;

        payload["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| {
                ExtractionError::Inference("response missing message content".to_string())
            })
    }
}
