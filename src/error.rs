//! Typed errors for the extraction pipeline.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

use crate::types::document::DocumentType;

/// Errors that can occur during document extraction.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// Upload exceeds the pre-flight size limit. Checked before any
    /// inference call and never retried.
    #[error("file too large: ~{approx_bytes} bytes (limit {limit})")]
    SizeLimitExceeded { approx_bytes: usize, limit: usize },

    /// The inference service failed. The upstream does not expose typed
    /// errors, so the message is kept verbatim for classification.
    #[error("inference service error: {0}")]
    Inference(String),

    /// The inference call succeeded but the response could not be
    /// interpreted as structured data.
    #[error("could not interpret response as structured data: {0}")]
    Parse(#[from] serde_json::Error),

    /// The parsed record is missing fields required for its document type.
    #[error("incomplete {document_type} extraction: {message}")]
    Validation {
        document_type: DocumentType,
        message: String,
    },

    /// Configuration error (e.g., missing API key for the reference client).
    #[error("config error: {0}")]
    Config(String),
}

impl ExtractionError {
    /// A human-readable explanation the caller can act on.
    ///
    /// Every variant maps to guidance in terms of what the uploader can do
    /// next (rescan, switch format, enter manually) rather than what went
    /// wrong internally.
    pub fn user_message(&self) -> String {
        match self {
            Self::SizeLimitExceeded { limit, .. } => format!(
                "This file is too large to process (limit {} MB). \
                 Try a lower scan resolution or a compressed PDF.",
                limit / (1024 * 1024)
            ),
            Self::Inference(_) => "We couldn't read this document after several attempts. \
                 Please try again, upload a clearer scan, or enter the details manually."
                .to_string(),
            Self::Parse(_) => "We couldn't understand the document's format. \
                 Try a clearer scan, a different file format (PDF or photo), \
                 or enter the details manually."
                .to_string(),
            Self::Validation { message, .. } => message.clone(),
            Self::Config(_) => {
                "Document extraction is not configured. Please contact support.".to_string()
            }
        }
    }
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_limit_message_names_limit() {
        let err = ExtractionError::SizeLimitExceeded {
            approx_bytes: 12 * 1024 * 1024,
            limit: 10 * 1024 * 1024,
        };
        assert!(err.user_message().contains("10 MB"));
    }

    #[test]
    fn test_validation_message_passes_through() {
        let err = ExtractionError::Validation {
            document_type: DocumentType::W2,
            message: "ensure Box 1 is visible".to_string(),
        };
        assert_eq!(err.user_message(), "ensure Box 1 is visible");
    }

    #[test]
    fn test_parse_message_mentions_format() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = ExtractionError::from(json_err);
        assert!(err.user_message().contains("format"));
    }
}
