//! Application state management

use std::sync::Arc;

use crate::config::Config;
use crate::llm::OpenAiClient;
use crate::ocr::DocumentAiProvider;
use crate::pipeline::{KycPipeline, PipelineSettings};

/// Shared application state, read-only after startup
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    pipeline: KycPipeline,
}

impl AppState {
    /// Create state around an already assembled pipeline
    pub fn new(config: Config, pipeline: KycPipeline) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, pipeline }),
        }
    }

    /// Wire the hosted Document AI and OpenAI clients from configuration
    pub fn from_config(config: Config) -> Self {
        let extractor = Arc::new(DocumentAiProvider::new(&config.document_ai));
        let llm = Arc::new(OpenAiClient::new(&config.openai));

        tracing::info!(
            processor = %config.document_ai.processor_name(),
            model = %llm.model(),
            structure_fields = config.pipeline.structure_fields,
            "Provider clients initialized"
        );

        let pipeline = KycPipeline::new(extractor, llm, PipelineSettings::from(&config.pipeline));
        Self::new(config, pipeline)
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the analysis pipeline
    pub fn pipeline(&self) -> &KycPipeline {
        &self.inner.pipeline
    }
}
