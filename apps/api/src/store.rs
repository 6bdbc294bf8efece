//! Storage port — the only place candidate and interview rows are written.
//!
//! Both tables are append-only: every call inserts a new row, nothing is ever
//! updated, and no uniqueness or foreign-key rules are applied.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::info;

use crate::errors::AppError;
use crate::models::candidate::{CandidateRecord, InterviewRequest};

/// Carried in `AppState` as `Arc<dyn CandidateStore>`.
#[async_trait]
pub trait CandidateStore: Send + Sync {
    /// Appends a candidate row and returns its id.
    async fn save_candidate(&self, record: &CandidateRecord) -> Result<i64, AppError>;

    /// Appends an interview row and returns its id.
    async fn save_interview(&self, request: &InterviewRequest) -> Result<i64, AppError>;
}

pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CandidateStore for SqliteStore {
    async fn save_candidate(&self, record: &CandidateRecord) -> Result<i64, AppError> {
        let result = sqlx::query(
            "INSERT INTO candidates (name, email, skills, parsed_resume) VALUES (?, ?, ?, ?)",
        )
        .bind(&record.name)
        .bind(&record.email)
        .bind(&record.skills)
        .bind(&record.parsed_resume)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        info!("Stored candidate {id}");
        Ok(id)
    }

    async fn save_interview(&self, request: &InterviewRequest) -> Result<i64, AppError> {
        let result = sqlx::query(
            "INSERT INTO interviews (candidate_email, interview_date, interview_time) VALUES (?, ?, ?)",
        )
        .bind(&request.candidate_email)
        .bind(&request.interview_date)
        .bind(&request.interview_time)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        info!("Stored interview request {id}");
        Ok(id)
    }
}
