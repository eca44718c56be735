//! Analysis Module
//!
//! Local post-processing of provider output: risk percentage extraction,
//! `Field: Value` table parsing, and the report types returned to clients.

mod fields;
mod percentage;
mod types;

pub use fields::{parse_fields, KycField};
pub use percentage::{extract_percentage, RiskScore};
pub use types::{
    AnalysisReport, PipelineOutcome, RiskCategory, RiskFinding, Stage, StageError,
    EMPTY_EXTRACTION_WARNING, FALLBACK_TEXT,
};
