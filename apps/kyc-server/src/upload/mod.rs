//! Document Intake Module
//!
//! Turns a multipart upload into an [`UploadedDocument`] and holds it in a
//! scoped temporary file while the pipeline runs:
//! - Extension validation (`jpg`, `png`, `pdf`)
//! - MIME type derivation
//! - SHA-256 fingerprint for logs
//! - Temp file removed on drop

pub mod temp_store;
pub mod types;

pub use temp_store::{compute_hash, ScopedTempFile};
pub use types::*;
