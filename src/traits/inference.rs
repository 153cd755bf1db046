//! Inference trait - the seam to the multimodal model service.
//!
//! Implementations wrap a specific provider and own their request timeout
//! (30s in the reference client). The pipeline never enforces one itself.

use async_trait::async_trait;

use crate::error::Result;

/// The external multimodal inference service.
///
/// Takes a document as a data URL plus extraction instructions and returns
/// the raw model text. Failures should surface as
/// [`ExtractionError::Inference`](crate::ExtractionError::Inference) with
/// the upstream message kept verbatim - classification matches on it.
#[async_trait]
pub trait Inference: Send + Sync {
    /// Run the model over one document.
    async fn infer(&self, data_url: &str, instructions: &str) -> Result<String>;
}
