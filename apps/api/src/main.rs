mod chat;
mod config;
mod db;
mod errors;
mod matching;
mod models;
mod resume;
mod routes;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::chat::rules::ChatRouter;
use crate::config::Config;
use crate::db::create_pool;
use crate::matching::matcher::StemIntersectionMatcher;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::SqliteStore;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting RecruitBot API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize SQLite (schema is created if missing)
    let pool = create_pool(&config.database_url).await?;
    let store = Arc::new(SqliteStore::new(pool));

    let matcher = Arc::new(StemIntersectionMatcher);
    let chat = Arc::new(ChatRouter::new(matcher.clone()));
    info!(
        "Upload limit: {} bytes; chat rules loaded",
        config.max_upload_bytes
    );

    let state = AppState {
        store,
        config: config.clone(),
        matcher,
        chat,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
