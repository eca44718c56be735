//! OCR Module
//!
//! Text extraction for uploaded identity documents. Extraction is delegated
//! to a hosted document-understanding service behind the [`TextExtractor`]
//! trait so tests can substitute a deterministic fake.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kyc_server::ocr::{DocumentAiProvider, TextExtractor};
//!
//! let provider = DocumentAiProvider::new(&config.document_ai);
//! let text = provider.extract_text(&bytes, "image/png").await?;
//! ```

mod provider;
mod types;

pub use provider::{DocumentAiProvider, TextExtractor};
pub use types::{OcrError, ProcessRequest, ProcessResponse, RawDocument};
