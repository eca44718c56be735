//! Upload types for document intake

use serde::Serialize;

// ============================================================================
// Constants
// ============================================================================

/// Extensions accepted by the upload form
pub const ACCEPTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "pdf"];

// ============================================================================
// Document Kind
// ============================================================================

/// Document format, derived from the declared file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Png,
    Jpeg,
}

impl DocumentKind {
    /// Total mapping: `pdf` and `png` are recognised, everything else is JPEG.
    pub fn from_extension(extension: &str) -> Self {
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => Self::Pdf,
            "png" => Self::Png,
            _ => Self::Jpeg,
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }

    /// Suffix used for the intake temp file
    pub fn temp_suffix(self) -> &'static str {
        match self {
            Self::Pdf => ".pdf",
            Self::Png => ".png",
            Self::Jpeg => ".jpg",
        }
    }
}

/// Lowercased extension after the last `.`, if any
pub fn file_extension(file_name: &str) -> Option<String> {
    let (_, ext) = file_name.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

pub fn is_accepted_extension(extension: &str) -> bool {
    ACCEPTED_EXTENSIONS.contains(&extension.to_ascii_lowercase().as_str())
}

// ============================================================================
// Uploaded Document
// ============================================================================

/// A single uploaded document, consumed once by the pipeline
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub file_name: String,
    pub extension: String,
    pub kind: DocumentKind,
    pub data: Vec<u8>,
}

impl UploadedDocument {
    /// Validate the file name and wrap the bytes
    pub fn new(file_name: impl Into<String>, data: Vec<u8>) -> Result<Self, UploadError> {
        let file_name = file_name.into();
        let extension = file_extension(&file_name)
            .ok_or_else(|| UploadError::InvalidFileType(file_name.clone()))?;

        if !is_accepted_extension(&extension) {
            return Err(UploadError::InvalidFileType(extension));
        }

        if data.is_empty() {
            return Err(UploadError::EmptyFile(file_name));
        }

        Ok(Self {
            kind: DocumentKind::from_extension(&extension),
            file_name,
            extension,
            data,
        })
    }

    pub fn mime_type(&self) -> &'static str {
        self.kind.mime_type()
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// Upload error types
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("No file provided. Use field name 'file' or 'document'")]
    MissingFile,

    #[error("Uploaded file is empty: {0}")]
    EmptyFile(String),

    #[error("Unsupported file type: {0} (accepted: jpg, png, pdf)")]
    InvalidFileType(String),

    #[error("File too large (max: {max} bytes)")]
    FileTooLarge { max: usize },

    #[error("Failed to read upload: {0}")]
    Multipart(String),

    #[error("Temporary file error: {0}")]
    TempFile(#[from] std::io::Error),
}

impl UploadError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            Self::MissingFile => StatusCode::BAD_REQUEST,
            Self::EmptyFile(_) => StatusCode::BAD_REQUEST,
            Self::InvalidFileType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::FileTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Multipart(_) => StatusCode::BAD_REQUEST,
            Self::TempFile(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_mapping() {
        assert_eq!(DocumentKind::from_extension("pdf").mime_type(), "application/pdf");
        assert_eq!(DocumentKind::from_extension("png").mime_type(), "image/png");
        assert_eq!(DocumentKind::from_extension("jpg").mime_type(), "image/jpeg");
        assert_eq!(DocumentKind::from_extension("jpeg").mime_type(), "image/jpeg");
        assert_eq!(DocumentKind::from_extension("tiff").mime_type(), "image/jpeg");
        assert_eq!(DocumentKind::from_extension("").mime_type(), "image/jpeg");
        assert_eq!(DocumentKind::from_extension("PDF").mime_type(), "application/pdf");
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("sample.png").as_deref(), Some("png"));
        assert_eq!(file_extension("scan.final.PDF").as_deref(), Some("pdf"));
        assert_eq!(file_extension("noext"), None);
        assert_eq!(file_extension("trailing."), None);
    }

    #[test]
    fn test_uploaded_document_validation() {
        let doc = UploadedDocument::new("passport.JPG", vec![1, 2, 3]).unwrap();
        assert_eq!(doc.extension, "jpg");
        assert_eq!(doc.kind, DocumentKind::Jpeg);
        assert_eq!(doc.mime_type(), "image/jpeg");
        assert_eq!(doc.size(), 3);

        assert!(matches!(
            UploadedDocument::new("notes.txt", vec![1]),
            Err(UploadError::InvalidFileType(ext)) if ext == "txt"
        ));
        assert!(matches!(
            UploadedDocument::new("id.png", Vec::new()),
            Err(UploadError::EmptyFile(_))
        ));
        assert!(matches!(
            UploadedDocument::new("README", vec![1]),
            Err(UploadError::InvalidFileType(_))
        ));
    }
}
