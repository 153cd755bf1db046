//! Domain data types for document extraction.
//!
//! All wire-facing types use camelCase field names, matching what the
//! inference service is instructed to emit and what dashboard clients
//! consume.

pub mod config;
pub mod document;
pub mod outcome;
pub mod request;

pub use config::PipelineConfig;
pub use document::{DocumentType, ExtractedRecord, Income, Party, Transaction};
pub use outcome::{ApiOutcome, ExtractionOutcome, OutcomeMode};
pub use request::IngestRequest;
