//! Tax Document Extraction Pipeline
//!
//! Turns an uploaded tax document (image or PDF, base64-encoded) into a
//! structured, typed record (a W-2, a 1099 variant, or a receipt) by
//! invoking an external multimodal inference service - reliably, despite
//! an unreliable upstream that can time out, return malformed output, or
//! be briefly unreachable.
//!
//! # Design Philosophy
//!
//! **Classify, then decide.** Every failure is assigned a closed kind
//! (Network, Parse, SizeLimit, Unknown) and that kind alone picks the
//! branch: retry transient load, degrade to deterministic demo data when
//! the upstream is unreachable, and fail hard - with actionable guidance -
//! when the content itself is the problem. Retrying an outage wastes
//! latency; retrying bad content produces the same bad content.
//!
//! # Usage
//!
//! ```rust,ignore
//! use taxdoc::{ApiOutcome, IngestRequest, NoopNormalizer, Pipeline};
//! use taxdoc::testing::MockInference;
//!
//! let pipeline = Pipeline::new(MockInference::new(), NoopNormalizer);
//! let request = IngestRequest::new(file_base64, "w2-2024.pdf", "application/pdf");
//! let outcome = ApiOutcome::from_result(pipeline.extract(&request).await);
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Collaborator seams (Inference, AddressNormalizer)
//! - [`types`] - Requests, extracted records, outcomes, configuration
//! - [`pipeline`] - Guard, retry, sanitize, validate, normalize, fallback
//! - [`classify`] - Error classification and the network signature list
//! - [`security`] - Credential handling for inference providers
//! - [`testing`] - Mock implementations for testing

pub mod classify;
pub mod error;
pub mod pipeline;
pub mod security;
pub mod testing;
pub mod traits;
pub mod types;

#[cfg(feature = "openai")]
pub mod ai;

// Re-export core types at crate root
pub use classify::{classify, is_network_message, ErrorKind, NETWORK_SIGNATURES};
pub use error::{ExtractionError, Result};
pub use security::ApiKey;
pub use traits::{
    inference::Inference,
    normalizer::{AddressNormalizer, NoopNormalizer, NormalizedAddress},
};
pub use types::{
    config::PipelineConfig,
    document::{DocumentType, ExtractedRecord, Income, Party, Transaction},
    outcome::{ApiOutcome, ExtractionOutcome, OutcomeMode},
    request::IngestRequest,
};

// Re-export pipeline components
pub use pipeline::{
    check_size, demo_record, normalize_party, normalize_record, sanitize_response, validate,
    Pipeline, RetryPolicy, EXTRACTION_INSTRUCTIONS,
};

// Re-export testing utilities
pub use testing::{MockInference, MockNormalizer};

#[cfg(feature = "openai")]
pub use ai::OpenAiInference;
