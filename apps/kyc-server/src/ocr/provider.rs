//! OCR Providers
//!
//! Defines the text extraction trait and the Google Document AI backend.

use async_trait::async_trait;
use base64::Engine;

use super::types::{OcrError, ProcessRequest, ProcessResponse, RawDocument};
use crate::config::DocumentAiConfig;

/// Text extraction capability: document bytes in, raw text out
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Provider name used in logs
    fn provider_name(&self) -> &'static str;

    /// Extract all text from a document
    async fn extract_text(&self, data: &[u8], mime_type: &str) -> Result<String, OcrError>;
}

/// Google Cloud Document AI provider
pub struct DocumentAiProvider {
    client: reqwest::Client,
    /// `https://{location}-documentai.googleapis.com`
    endpoint: String,
    /// `projects/{project}/locations/{location}/processors/{id}`
    processor_name: String,
    access_token: String,
}

impl DocumentAiProvider {
    pub fn new(config: &DocumentAiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            processor_name: config.processor_name(),
            access_token: config.access_token.clone(),
        }
    }

    fn process_url(&self) -> String {
        format!("{}/v1/{}:process", self.endpoint, self.processor_name)
    }
}

#[async_trait]
impl TextExtractor for DocumentAiProvider {
    fn provider_name(&self) -> &'static str {
        "document-ai"
    }

    async fn extract_text(&self, data: &[u8], mime_type: &str) -> Result<String, OcrError> {
        let request = ProcessRequest {
            raw_document: RawDocument {
                content: base64::engine::general_purpose::STANDARD.encode(data),
                mime_type: mime_type.to_string(),
            },
        };

        let response = self
            .client
            .post(self.process_url())
            .bearer_auth(&self.access_token)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    OcrError::ProviderNotAvailable(format!("{}: {}", self.endpoint, e))
                } else {
                    OcrError::ApiError(format!("Failed to call Document AI: {}", e))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(OcrError::ApiError(format!(
                "Document AI returned {}: {}",
                status, body
            )));
        }

        let result: ProcessResponse = response
            .json()
            .await
            .map_err(|e| OcrError::ProcessingError(format!("Failed to parse response: {}", e)))?;

        Ok(result.document.text.trim().to_string())
    }
}
