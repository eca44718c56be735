//! Scoped temporary storage for in-flight uploads
//!
//! Each request writes its document to exactly one temp file. The file is
//! deleted when the [`ScopedTempFile`] is dropped, so every exit path of the
//! pipeline (success, early stop, error) cleans up.

use std::io::Write;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;

use super::types::{UploadError, UploadedDocument};

/// Temp file holding one uploaded document
#[derive(Debug)]
pub struct ScopedTempFile {
    file: NamedTempFile,
}

impl ScopedTempFile {
    /// Persist the document under `dir` (system temp dir when `None`)
    pub fn create(document: &UploadedDocument, dir: Option<&Path>) -> Result<Self, UploadError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("kyc-upload-").suffix(document.kind.temp_suffix());

        let mut file = match dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };

        file.write_all(&document.data)?;
        file.flush()?;

        tracing::debug!(
            path = %file.path().display(),
            size = document.size(),
            "Wrote upload to temp file"
        );

        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn path_buf(&self) -> PathBuf {
        self.file.path().to_path_buf()
    }

    /// Read the stored bytes back
    pub async fn read(&self) -> Result<Vec<u8>, UploadError> {
        Ok(tokio::fs::read(self.file.path()).await?)
    }

    /// Remove the file now, reporting failures instead of ignoring them
    pub fn remove(self) -> Result<(), UploadError> {
        let path = self.path_buf();
        self.file.close()?;
        tracing::debug!(path = %path.display(), "Removed temp file");
        Ok(())
    }
}

/// Compute SHA-256 hash of data
pub fn compute_hash(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}
