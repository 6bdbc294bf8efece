//! Axum route handlers for the job-match check.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::matching::matcher::MatchReport;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    /// Skills string as stored on the candidate record.
    pub candidate_skills: String,
    pub jd_text: String,
}

/// POST /api/v1/match
pub async fn handle_match(
    State(state): State<AppState>,
    Json(req): Json<MatchRequest>,
) -> Result<Json<MatchReport>, AppError> {
    if req.candidate_skills.trim().is_empty() {
        return Err(AppError::Validation(
            "Please upload your resume first.".to_string(),
        ));
    }
    if req.jd_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Please paste a job description to check for matches.".to_string(),
        ));
    }

    let report = state.matcher.report(&req.candidate_skills, &req.jd_text);
    tracing::info!("Job match found {} skill(s)", report.match_count);
    Ok(Json(report))
}
