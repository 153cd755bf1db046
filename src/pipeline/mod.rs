//! Extraction pipeline - the core of the library.
//!
//! The pipeline orchestrates:
//! - Pre-flight size guarding
//! - Retry with capped exponential backoff around the inference call
//! - Response sanitization (fence stripping, brace slicing)
//! - Structured parse and per-document-type validation
//! - Address normalization per party block
//! - Demo fallback when the inference path is unreachable

pub mod fallback;
pub mod guard;
pub mod normalize;
pub mod orchestrator;
pub mod prompts;
pub mod retry;
pub mod sanitize;
pub mod validate;

pub use fallback::demo_record;
pub use guard::check_size;
pub use normalize::{normalize_party, normalize_record};
pub use orchestrator::Pipeline;
pub use prompts::EXTRACTION_INSTRUCTIONS;
pub use retry::RetryPolicy;
pub use sanitize::sanitize_response;
pub use validate::validate;
