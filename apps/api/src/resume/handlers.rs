use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extract::{extract_resume_text, ExtractError, ResumeFormat};
use crate::state::AppState;
use crate::storage::ResumeUpload;

/// Largest résumé file accepted.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Request body limit for the upload route: the file plus multipart framing.
pub const MAX_UPLOAD_BODY_BYTES: usize = MAX_UPLOAD_BYTES + 64 * 1024;

const RESUME_FIELD: &str = "resume";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub url: String,
    pub public_id: String,
    pub original_filename: String,
    pub extracted_text: String,
}

/// POST /api/resume/resume
///
/// Multipart upload with a `resume` file field (PDF or DOCX). The text is
/// extracted before the file is stored, so unreadable files are never kept.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let (file_name, bytes) = read_resume_field(&mut multipart)
        .await?
        .ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;

    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(AppError::PayloadTooLarge(format!(
            "Resume exceeds the {} MB limit",
            MAX_UPLOAD_BYTES / (1024 * 1024)
        )));
    }

    let format = ResumeFormat::from_filename(&file_name)?;
    let extracted_text = extract_blocking(bytes.clone(), format).await?;

    let stored = state
        .store
        .put(ResumeUpload {
            file_name: file_name.clone(),
            format,
            bytes,
        })
        .await?;

    info!(
        public_id = %stored.public_id,
        chars = extracted_text.chars().count(),
        "Stored resume {file_name}"
    );

    Ok(Json(UploadResponse {
        url: stored.url,
        public_id: stored.public_id,
        original_filename: file_name,
        extracted_text,
    }))
}

/// First `resume` field as (file name, bytes). Other fields are skipped.
async fn read_resume_field(
    multipart: &mut Multipart,
) -> Result<Option<(String, Bytes)>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(multipart_error)?
    {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or(RESUME_FIELD).to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(multipart_error)?;
        return Ok(Some((file_name, bytes)));
    }
    Ok(None)
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(format!("Malformed multipart body: {}", e.body_text()))
    }
}

/// Runs extraction off the async executor. A panicking extractor counts as
/// a parse failure.
async fn extract_blocking(bytes: Bytes, format: ResumeFormat) -> Result<String, AppError> {
    let text = tokio::task::spawn_blocking(move || extract_resume_text(&bytes, format))
        .await
        .map_err(|e| ExtractError::failed(format, format!("extractor aborted: {e}")))??;
    Ok(text)
}
