use anyhow::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tracing::info;

const CREATE_CANDIDATES: &str = r#"
CREATE TABLE IF NOT EXISTS candidates (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    email TEXT,
    skills TEXT,
    parsed_resume TEXT
)
"#;

const CREATE_INTERVIEWS: &str = r#"
CREATE TABLE IF NOT EXISTS interviews (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    candidate_email TEXT,
    interview_date TEXT,
    interview_time TEXT
)
"#;

/// Creates and returns a SQLite connection pool with the schema in place.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    info!("Connecting to SQLite...");

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    init_schema(&pool).await?;

    info!("SQLite connection pool established");
    Ok(pool)
}

/// Idempotent; safe to run on every startup.
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(CREATE_CANDIDATES).execute(pool).await?;
    sqlx::query(CREATE_INTERVIEWS).execute(pool).await?;
    Ok(())
}
