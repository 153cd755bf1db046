//! Terminal outcomes of the pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;
use crate::types::document::ExtractedRecord;

/// How the returned record was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeMode {
    /// Model output accepted as likely genuine.
    Ai,
    /// Model output accepted but flagged as placeholder data.
    Template,
    /// Inference path unavailable; deterministic substitute data.
    Demo,
}

impl fmt::Display for OutcomeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ai => "ai",
            Self::Template => "template",
            Self::Demo => "demo",
        })
    }
}

/// The terminal result of one pipeline run.
///
/// Constructed exactly once per request and never mutated. Hard failures
/// are the `Err` arm of the pipeline's `Result`, not a degenerate outcome.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionOutcome {
    pub mode: OutcomeMode,
    pub record: ExtractedRecord,
    /// Always populated for non-`ai` modes.
    pub message: Option<String>,
}

/// The wire envelope handed to embedding callers: exactly one well-formed
/// response per request, success or not.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiOutcome {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<OutcomeMode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ExtractedRecord>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiOutcome {
    /// Flatten a pipeline result into the wire envelope.
    pub fn from_result(result: Result<ExtractionOutcome>) -> Self {
        match result {
            Ok(outcome) => Self {
                success: true,
                mode: Some(outcome.mode),
                data: Some(outcome.record),
                message: outcome.message,
                error: None,
            },
            Err(err) => Self {
                success: false,
                mode: None,
                data: None,
                message: None,
                error: Some(err.user_message()),
            },
        }
    }
}

impl From<Result<ExtractionOutcome>> for ApiOutcome {
    fn from(result: Result<ExtractionOutcome>) -> Self {
        Self::from_result(result)
    }
}
