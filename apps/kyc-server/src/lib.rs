//! KYC Server Library
//!
//! Upload an identity document, extract its text with a hosted OCR service,
//! structure the fields and score fraud/AML risk with a hosted LLM.
//! The server binary is in main.rs; the modules are exposed here for tests.
//!
//! # Modules
//!
//! - `upload`: Document intake (validation, MIME mapping, scoped temp file)
//! - `ocr`: Text extraction trait and Document AI provider
//! - `llm`: Completion trait, OpenAI client and prompt templates
//! - `analysis`: Percentage extraction, field table, report types
//! - `pipeline`: Stage orchestration
//! - `html`, `routes`: HTTP surface

pub mod analysis;
pub mod config;
pub mod error;
pub mod html;
pub mod llm;
pub mod ocr;
pub mod pipeline;
pub mod routes;
pub mod state;
pub mod upload;
