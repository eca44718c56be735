//! Report types produced by one pipeline run

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::fields::KycField;
use super::percentage::RiskScore;

/// Substituted for the output of a failed provider stage
pub const FALLBACK_TEXT: &str = "Unknown risk / error occurred";

pub const EMPTY_EXTRACTION_WARNING: &str = "Could not extract text from the document.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskCategory {
    Fraud,
    Aml,
}

impl RiskCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Fraud => "Fraud",
            Self::Aml => "AML",
        }
    }
}

/// Percentage plus the narrative it was read from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskFinding {
    pub category: RiskCategory,
    pub score: RiskScore,
    pub narrative: String,
}

impl RiskFinding {
    pub fn from_narrative(category: RiskCategory, narrative: String) -> Self {
        Self {
            category,
            score: RiskScore::from_text(&narrative),
            narrative,
        }
    }
}

/// Pipeline stage, used to label errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Extraction,
    Structuring,
    Fraud,
    Aml,
}

impl Stage {
    pub fn description(self) -> &'static str {
        match self {
            Self::Extraction => "document text extraction",
            Self::Structuring => "field structuring",
            Self::Fraud => "fraud risk analysis",
            Self::Aml => "AML risk analysis",
        }
    }
}

/// A provider failure caught at one stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageError {
    pub stage: Stage,
    pub message: String,
}

impl StageError {
    pub fn new(stage: Stage, error: impl std::fmt::Display) -> Self {
        Self {
            stage,
            message: format!("Error during {}: {}", stage.description(), error),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineOutcome {
    /// Every stage ran (possibly on fallback text)
    Completed,
    /// Extraction produced no text; no analysis attempted
    Halted,
}

/// Everything shown to the user for one uploaded document
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub request_id: Uuid,
    pub file_name: String,
    pub mime_type: &'static str,
    /// SHA-256 of the uploaded bytes
    pub document_digest: String,
    pub outcome: PipelineOutcome,
    pub extracted_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structured_text: Option<String>,
    pub fields: Vec<KycField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fraud: Option<RiskFinding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aml: Option<RiskFinding>,
    pub warnings: Vec<String>,
    pub errors: Vec<StageError>,
    pub analyzed_at: DateTime<Utc>,
}

impl AnalysisReport {
    pub fn is_halted(&self) -> bool {
        self.outcome == PipelineOutcome::Halted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finding_from_narrative() {
        let finding = RiskFinding::from_narrative(
            RiskCategory::Fraud,
            "**Fraud Risk:** 10%\n**Analysis:** Looks consistent.".to_string(),
        );
        assert_eq!(finding.score, RiskScore::Percent(10));
        assert!(finding.narrative.contains("Looks consistent"));
    }

    #[test]
    fn test_fallback_has_no_percentage() {
        let finding = RiskFinding::from_narrative(RiskCategory::Aml, FALLBACK_TEXT.to_string());
        assert_eq!(finding.score, RiskScore::Unknown);
    }

    #[test]
    fn test_stage_error_names_stage() {
        let error = StageError::new(Stage::Aml, "LLM endpoint returned 500: boom");
        assert_eq!(error.stage, Stage::Aml);
        assert_eq!(
            error.message,
            "Error during AML risk analysis: LLM endpoint returned 500: boom"
        );
        assert_eq!(serde_json::to_value(&error).unwrap()["stage"], "aml");
    }
}
