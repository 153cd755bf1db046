//! Ingest request - one uploaded document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single uploaded document awaiting extraction.
///
/// Created once per upload and never mutated. The file name is used only
/// as a weak type hint when the pipeline has to fall back to demo data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestRequest {
    /// Base64-encoded file content (image or PDF).
    pub file_data: String,

    /// Original file name, e.g. `w2-2024.pdf`.
    pub file_name: String,

    /// MIME type of the upload, e.g. `application/pdf` or `image/png`.
    pub mime_type: String,

    /// Opaque identifier of the uploading caller, if any.
    #[serde(default)]
    pub caller_id: Option<String>,

    /// When the upload was received.
    #[serde(default = "Utc::now")]
    pub received_at: DateTime<Utc>,
}

impl IngestRequest {
    /// Create a new request for an upload.
    pub fn new(
        file_data: impl Into<String>,
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            file_data: file_data.into(),
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            caller_id: None,
            received_at: Utc::now(),
        }
    }

    /// Attach a caller identifier.
    pub fn with_caller_id(mut self, caller_id: impl Into<String>) -> Self {
        self.caller_id = Some(caller_id.into());
        self
    }

    /// The document as a data URL, the form the inference service accepts.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.file_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url_shape() {
        let request = IngestRequest::new("aGVsbG8=", "receipt.png", "image/png");
        assert_eq!(request.data_url(), "data:image/png;base64,aGVsbG8=");
    }

    #[test]
    fn test_deserializes_without_optional_fields() {
        let request: IngestRequest = serde_json::from_str(
            r#"{"fileData":"abc","fileName":"w2.pdf","mimeType":"application/pdf"}"#,
        )
        .unwrap();
        assert!(request.caller_id.is_none());
        assert_eq!(request.file_name, "w2.pdf");
    }
}
