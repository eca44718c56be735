//! KYC Pipeline
//!
//! intake → text extraction → field structuring → fraud → AML
//!
//! Stages run strictly in order, each on the previous stage's text. Provider
//! failures after extraction degrade to [`FALLBACK_TEXT`](crate::analysis::FALLBACK_TEXT)
//! instead of aborting the run.

mod service;

pub use service::{KycPipeline, PipelineError, PipelineSettings};
