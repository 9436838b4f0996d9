use axum::extract::State;
use axum::Json;
use serde::Serialize;
use sqlx::{Pool, Postgres};
use std::sync::OnceLock;
use std::time::Instant;

static STARTED: OnceLock<Instant> = OnceLock::new();

/// Capture the process start time; the health payload reports uptime
/// relative to it.
pub fn record_start_time() {
    STARTED.get_or_init(Instant::now);
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub database: String,
    pub indexed_users: u64,
    pub uptime_seconds: u64,
    pub version: &'static str,
}

/// Liveness probe. Pings Postgres and reports the search index size, so a
/// deploy that booted with an empty index is visible without opening the app.
pub async fn health_check(State(pool): State<Pool<Postgres>>) -> Json<HealthReport> {
    Json(HealthReport {
        status: "ok",
        database: database_status(&pool).await,
        indexed_users: crate::search::get_search().num_docs(),
        uptime_seconds: STARTED.get().map(|t| t.elapsed().as_secs()).unwrap_or(0),
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn database_status(pool: &Pool<Postgres>) -> String {
    match sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(pool).await {
        Ok(_) => "connected".into(),
        Err(e) => format!("error: {e}"),
    }
}
