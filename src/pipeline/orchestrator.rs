//! The end-to-end extraction pipeline.
//!
//! A straight-line machine: size check, retry-wrapped inference,
//! sanitize, parse, validate, normalize, template check. No state is
//! revisited; the only loop is the bounded retry loop. One request per
//! invocation, no shared mutable state, so a single `Pipeline` is safely
//! shared across concurrent requests.

use crate::classify::{classify, ErrorKind};
use crate::error::Result;
use crate::pipeline::{fallback, guard, normalize, prompts, sanitize};
use crate::pipeline::{retry::RetryPolicy, validate};
use crate::traits::{AddressNormalizer, Inference};
use crate::types::config::PipelineConfig;
use crate::types::document::ExtractedRecord;
use crate::types::outcome::{ExtractionOutcome, OutcomeMode};
use crate::types::request::IngestRequest;

/// Degraded-mode explanation attached to every demo outcome.
const DEMO_MESSAGE: &str = "The document reader is temporarily unreachable, so sample data is \
     shown instead. Review every field and replace the sample values \
     before using this record.";

/// Explanation attached when the model flags the document as placeholder.
const TEMPLATE_MESSAGE: &str = "This document appears to contain sample or placeholder values \
     rather than real data. Double-check each field before filing.";

/// Composes the guard, retry policy, sanitizer, validator, and
/// normalizer into the end-to-end pipeline.
pub struct Pipeline<I, N> {
    inference: I,
    normalizer: N,
    config: PipelineConfig,
}

impl<I, N> Pipeline<I, N>
where
    I: Inference,
    N: AddressNormalizer,
{
    /// Create a pipeline with the default production policy.
    pub fn new(inference: I, normalizer: N) -> Self {
        Self {
            inference,
            normalizer,
            config: PipelineConfig::default(),
        }
    }

    /// Replace the pipeline configuration.
    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Run one upload through the pipeline.
    ///
    /// Returns `Ok` for every accepted record - including degraded demo
    /// output - and `Err` only for hard failures (size, parse,
    /// validation, retries exhausted), whose
    /// [`user_message`](crate::ExtractionError::user_message) is always
    /// actionable.
    pub async fn extract(&self, request: &IngestRequest) -> Result<ExtractionOutcome> {
        guard::check_size(&request.file_data, self.config.max_file_bytes)?;

        let data_url = request.data_url();
        let policy = RetryPolicy::from_config(&self.config);
        let raw = match policy
            .run(|| self.inference.infer(&data_url, prompts::EXTRACTION_INSTRUCTIONS))
            .await
        {
            Ok(raw) => raw,
            Err(err) if classify(&err) == ErrorKind::Network => {
                tracing::warn!(
                    error = %err,
                    file_name = %request.file_name,
                    "inference unreachable, serving demo data"
                );
                return Ok(ExtractionOutcome {
                    mode: OutcomeMode::Demo,
                    record: fallback::demo_record(&request.file_name),
                    message: Some(DEMO_MESSAGE.to_string()),
                });
            }
            Err(err) => return Err(err),
        };

        let cleaned = sanitize::sanitize_response(&raw);
        let mut record: ExtractedRecord = serde_json::from_str(&cleaned)?;

        // Completeness is checked before the template flag is interpreted.
        validate::validate(&record)?;

        normalize::normalize_record(&mut record, &self.normalizer);

        tracing::info!(
            document_type = %record.document_type,
            is_template = record.is_template_data,
            confidence = record.confidence.map(f64::from),
            file_name = %request.file_name,
            "document extracted"
        );

        if record.is_template_data {
            Ok(ExtractionOutcome {
                mode: OutcomeMode::Template,
                record,
                message: Some(TEMPLATE_MESSAGE.to_string()),
            })
        } else {
            Ok(ExtractionOutcome {
                mode: OutcomeMode::Ai,
                record,
                message: None,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractionError;
    use crate::testing::{MockInference, MockNormalizer};
    use crate::types::document::DocumentType;

    fn request() -> IngestRequest {
        IngestRequest::new("aGVsbG8=", "w2-2024.pdf", "application/pdf")
    }

    fn valid_w2_json() -> &'static str {
        r#"{
            "documentType": "w2",
            "employer": {"name": "Acme Corp", "ein": "12-3456789"},
            "employee": {"name": "J. Doe", "ssn": "123-45-6789"},
            "income": {"wages": 48000},
            "taxYear": 2024,
            "isTemplateData": false,
            "confidence": 0.93
        }"#
    }

    #[tokio::test]
    async fn test_happy_path_is_ai_mode() {
        let pipeline = Pipeline::new(
            MockInference::new().with_response(valid_w2_json()),
            MockNormalizer::new(),
        );
        let outcome = pipeline.extract(&request()).await.unwrap();
        assert_eq!(outcome.mode, OutcomeMode::Ai);
        assert_eq!(outcome.record.document_type, DocumentType::W2);
        assert!(outcome.message.is_none());
    }

    #[tokio::test]
    async fn test_oversized_upload_never_reaches_inference() {
        let inference = MockInference::new().with_response(valid_w2_json());
        let oversized = IngestRequest::new(
            "A".repeat(15 * 1024 * 1024),
            "huge.pdf",
            "application/pdf",
        );
        let pipeline = Pipeline::new(inference, MockNormalizer::new());
        let err = pipeline.extract(&oversized).await.unwrap_err();
        assert!(matches!(err, ExtractionError::SizeLimitExceeded { .. }));
        assert_eq!(pipeline.inference.call_count(), 0);
    }

    #[tokio::test]
    async fn test_template_flag_routes_to_template_mode() {
        let json = valid_w2_json().replace("\"isTemplateData\": false", "\"isTemplateData\": true");
        let pipeline = Pipeline::new(
            MockInference::new().with_response(json),
            MockNormalizer::new(),
        );
        let outcome = pipeline.extract(&request()).await.unwrap();
        assert_eq!(outcome.mode, OutcomeMode::Template);
        assert!(outcome.message.as_deref().unwrap().contains("placeholder"));
    }

    #[tokio::test]
    async fn test_parse_failure_is_hard_and_unretried() {
        let pipeline = Pipeline::new(
            MockInference::new().with_default_response("I could not read this document."),
            MockNormalizer::new(),
        );
        let err = pipeline.extract(&request()).await.unwrap_err();
        assert!(matches!(err, ExtractionError::Parse(_)));
        assert_eq!(pipeline.inference.call_count(), 1);
    }
}
