//! OCR Types
//!
//! Wire types for the Document AI `:process` call.

use serde::{Deserialize, Serialize};

/// Request body for `processors/{id}:process`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRequest {
    pub raw_document: RawDocument,
}

/// Inline document payload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDocument {
    /// Base64 encoded file content
    pub content: String,
    pub mime_type: String,
}

/// Response body; only the flattened text is used
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProcessResponse {
    #[serde(default)]
    pub document: ProcessedDocument,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProcessedDocument {
    #[serde(default)]
    pub text: String,
}

/// OCR error types
#[derive(Debug, thiserror::Error)]
pub enum OcrError {
    #[error("OCR provider not available: {0}")]
    ProviderNotAvailable(String),

    #[error("OCR processing failed: {0}")]
    ProcessingError(String),

    #[error("API error: {0}")]
    ApiError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_camel_case() {
        let request = ProcessRequest {
            raw_document: RawDocument {
                content: "aGVsbG8=".to_string(),
                mime_type: "image/png".to_string(),
            },
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["rawDocument"]["content"], "aGVsbG8=");
        assert_eq!(json["rawDocument"]["mimeType"], "image/png");
    }

    #[test]
    fn test_response_tolerates_missing_text() {
        let parsed: ProcessResponse = serde_json::from_str(r#"{"document": {}}"#).unwrap();
        assert_eq!(parsed.document.text, "");

        let parsed: ProcessResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.document.text, "");
    }
}
