use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::candidate::InterviewRequest;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct InterviewCreated {
    pub interview_id: i64,
}

/// POST /api/v1/interviews
/// Stores the request exactly as sent; no date, time or email checks.
pub async fn handle_schedule_interview(
    State(state): State<AppState>,
    Json(req): Json<InterviewRequest>,
) -> Result<(StatusCode, Json<InterviewCreated>), AppError> {
    let interview_id = state.store.save_interview(&req).await?;
    Ok((StatusCode::CREATED, Json(InterviewCreated { interview_id })))
}
