use std::path::PathBuf;
use std::sync::Arc;

use uuid::Uuid;

use crate::analysis::{
    parse_fields, AnalysisReport, PipelineOutcome, RiskCategory, RiskFinding, Stage, StageError,
    EMPTY_EXTRACTION_WARNING, FALLBACK_TEXT,
};
use crate::config::PipelineConfig;
use crate::llm::{prompt, CompletionProvider};
use crate::ocr::TextExtractor;
use crate::upload::{compute_hash, ScopedTempFile, UploadError, UploadedDocument};

/// Pipeline behaviour switches
#[derive(Debug, Clone, Default)]
pub struct PipelineSettings {
    /// Run the LLM structuring stage; otherwise risk stages see raw OCR text
    pub structure_fields: bool,
    pub temp_dir: Option<PathBuf>,
}

impl From<&PipelineConfig> for PipelineSettings {
    fn from(config: &PipelineConfig) -> Self {
        Self {
            structure_fields: config.structure_fields,
            temp_dir: config.temp_dir.clone(),
        }
    }
}

/// Failures that prevent a report from being produced at all
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Document intake failed: {0}")]
    Intake(#[from] UploadError),
}

/// Runs one uploaded document through every stage
pub struct KycPipeline {
    extractor: Arc<dyn TextExtractor>,
    llm: Arc<dyn CompletionProvider>,
    settings: PipelineSettings,
}

impl KycPipeline {
    pub fn new(
        extractor: Arc<dyn TextExtractor>,
        llm: Arc<dyn CompletionProvider>,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            extractor,
            llm,
            settings,
        }
    }

    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    /// Analyze one document.
    ///
    /// The document lives in a temp file for the duration of the call; it is
    /// removed before this returns on every path.
    pub async fn analyze(&self, document: UploadedDocument) -> Result<AnalysisReport, PipelineError> {
        let request_id = Uuid::new_v4();
        let digest = compute_hash(&document.data);

        tracing::info!(
            %request_id,
            file_name = %document.file_name,
            mime_type = document.mime_type(),
            size = document.size(),
            digest = %digest,
            "Starting KYC analysis"
        );

        let stored = ScopedTempFile::create(&document, self.settings.temp_dir.as_deref())?;

        let mut report = AnalysisReport {
            request_id,
            file_name: document.file_name.clone(),
            mime_type: document.mime_type(),
            document_digest: digest,
            outcome: PipelineOutcome::Halted,
            extracted_text: String::new(),
            structured_text: None,
            fields: Vec::new(),
            fraud: None,
            aml: None,
            warnings: Vec::new(),
            errors: Vec::new(),
            analyzed_at: chrono::Utc::now(),
        };

        let bytes = stored.read().await?;
        report.extracted_text = self.extract(&bytes, document.mime_type(), &mut report.errors).await;

        if report.extracted_text.is_empty() {
            tracing::warn!(%request_id, "No text extracted, skipping risk analysis");
            report.warnings.push(EMPTY_EXTRACTION_WARNING.to_string());
            stored.remove()?;
            return Ok(report);
        }

        let kyc_text = if self.settings.structure_fields {
            let structured = self
                .complete(
                    Stage::Structuring,
                    prompt::STRUCTURING_SYSTEM,
                    &prompt::structuring_prompt(&report.extracted_text),
                    &mut report.errors,
                )
                .await;
            report.structured_text = Some(structured.clone());
            structured
        } else {
            report.extracted_text.clone()
        };
        report.fields = parse_fields(&kyc_text);

        let fraud = self
            .complete(
                Stage::Fraud,
                prompt::FRAUD_SYSTEM,
                &prompt::fraud_prompt(&kyc_text),
                &mut report.errors,
            )
            .await;
        let aml = self
            .complete(
                Stage::Aml,
                prompt::AML_SYSTEM,
                &prompt::aml_prompt(&kyc_text),
                &mut report.errors,
            )
            .await;

        let fraud = RiskFinding::from_narrative(RiskCategory::Fraud, fraud);
        let aml = RiskFinding::from_narrative(RiskCategory::Aml, aml);

        tracing::info!(
            %request_id,
            fraud = %fraud.score,
            aml = %aml.score,
            stage_errors = report.errors.len(),
            "KYC analysis complete"
        );

        report.fraud = Some(fraud);
        report.aml = Some(aml);
        report.outcome = PipelineOutcome::Completed;

        stored.remove()?;
        Ok(report)
    }

    /// OCR stage. A provider error is reported and treated as no text.
    async fn extract(&self, bytes: &[u8], mime_type: &str, errors: &mut Vec<StageError>) -> String {
        match self.extractor.extract_text(bytes, mime_type).await {
            Ok(text) => {
                let text = text.trim().to_string();
                tracing::debug!(
                    provider = self.extractor.provider_name(),
                    chars = text.len(),
                    "Text extraction finished"
                );
                text
            }
            Err(e) => {
                tracing::error!(
                    provider = self.extractor.provider_name(),
                    "Text extraction failed: {}",
                    e
                );
                errors.push(StageError::new(Stage::Extraction, &e));
                String::new()
            }
        }
    }

    /// LLM stage. A provider error is reported and replaced by the fallback text.
    async fn complete(
        &self,
        stage: Stage,
        system: &str,
        prompt: &str,
        errors: &mut Vec<StageError>,
    ) -> String {
        match self.llm.complete(system, prompt).await {
            Ok(text) => {
                tracing::debug!(?stage, chars = text.len(), "Completion received");
                text.trim().to_string()
            }
            Err(e) => {
                tracing::error!(?stage, "Completion failed: {}", e);
                errors.push(StageError::new(stage, &e));
                FALLBACK_TEXT.to_string()
            }
        }
    }
}
