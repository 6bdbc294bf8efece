//! Axum route handlers for resume upload.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::candidate::CandidateRecord;
use crate::resume::record::build_record;
use crate::resume::text::{extract, DocumentKind};
use crate::state::AppState;

const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub candidate_id: i64,
    pub candidate: CandidateRecord,
}

/// POST /api/v1/resumes
///
/// Multipart upload with a single `file` field (PDF or DOCX). The parsed
/// record is stored and echoed back.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), AppError> {
    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let kind = DocumentKind::detect(field.content_type(), field.file_name()).ok_or_else(|| {
            AppError::UnsupportedMediaType("Upload a PDF or DOCX resume".to_string())
        })?;
        let bytes = field.bytes().await?;
        upload = Some((kind, bytes));
        break;
    }

    let (kind, bytes) = upload
        .ok_or_else(|| AppError::Validation(format!("Missing '{FILE_FIELD}' field")))?;
    info!("Parsing {:?} resume ({} bytes)", kind, bytes.len());

    // Extraction and regex scanning are CPU-bound.
    let record = tokio::task::spawn_blocking(move || {
        extract(&bytes, kind).map(|text| build_record(&text))
    })
    .await
    .map_err(|e| AppError::Internal(e.into()))??;

    let candidate_id = state.store.save_candidate(&record).await?;
    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            candidate_id,
            candidate: record,
        }),
    ))
}
