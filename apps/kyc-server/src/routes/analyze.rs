//! Document analysis endpoints
//!
//! - GET  /                 - Upload form
//! - POST /analyze          - Multipart upload, HTML report
//! - POST /api/v1/analyze   - Multipart upload, JSON report

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json, Router,
};

use crate::analysis::AnalysisReport;
use crate::error::{AppError, Result};
use crate::html::{render_error_page, render_report_page, render_upload_page};
use crate::state::AppState;
use crate::upload::{UploadError, UploadedDocument};

/// Multipart field names accepted for the document
const FILE_FIELDS: &[&str] = &["file", "document"];

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(upload_form))
        .route("/analyze", post(analyze_html))
        .route("/api/v1/analyze", post(analyze_json))
}

async fn upload_form(State(state): State<AppState>) -> Html<String> {
    Html(render_upload_page(state.config().server.max_upload_bytes))
}

/// POST /api/v1/analyze
async fn analyze_json(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalysisReport>> {
    let report = run(&state, multipart).await?;
    Ok(Json(report))
}

/// POST /analyze
///
/// Halted runs and stage errors still render as 200; only intake failures
/// produce an error page.
async fn analyze_html(
    State(state): State<AppState>,
    multipart: Multipart,
) -> std::result::Result<Html<String>, (StatusCode, Html<String>)> {
    match run(&state, multipart).await {
        Ok(report) => Ok(Html(render_report_page(&report))),
        Err(e) => {
            let status = e.status_code();
            if status.is_server_error() {
                tracing::error!("Analysis request failed: {}", e);
            } else {
                tracing::warn!("Analysis request rejected: {}", e);
            }
            Err((status, Html(render_error_page(&e.public_message()))))
        }
    }
}

async fn run(state: &AppState, multipart: Multipart) -> Result<AnalysisReport> {
    let max = state.config().server.max_upload_bytes;
    let document = read_document(multipart, max).await?;
    Ok(state.pipeline().analyze(document).await?)
}

/// Take the first file field from the form
async fn read_document(
    mut multipart: Multipart,
    max_upload_bytes: usize,
) -> std::result::Result<UploadedDocument, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, max_upload_bytes))?
    {
        let name = field.name().unwrap_or("").to_string();
        if !FILE_FIELDS.contains(&name.as_str()) {
            tracing::debug!("Skipping multipart field '{}'", name);
            continue;
        }

        let file_name = field
            .file_name()
            .map(|s| s.to_string())
            .ok_or(UploadError::MissingFile)?;

        let data = field
            .bytes()
            .await
            .map_err(|e| multipart_error(e, max_upload_bytes))?;

        tracing::debug!("Read {} bytes for '{}'", data.len(), file_name);

        return Ok(UploadedDocument::new(file_name, data.to_vec())?);
    }

    Err(UploadError::MissingFile.into())
}

fn multipart_error(e: MultipartError, max_upload_bytes: usize) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        UploadError::FileTooLarge {
            max: max_upload_bytes,
        }
        .into()
    } else {
        UploadError::Multipart(e.body_text()).into()
    }
}
