use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;
use std::time::Duration;

static POOL: OnceLock<Pool<Postgres>> = OnceLock::new();
static MIGRATED: AtomicBool = AtomicBool::new(false);

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Create the connection pool from `DATABASE_URL` and
/// `DATABASE_MAX_CONNECTIONS`. Uses `connect_lazy`, so no connection opens
/// until the first query runs.
pub fn create_pool() -> Pool<Postgres> {
    // .env is a dev convenience; production sets the vars directly.
    let _ = dotenvy::dotenv();

    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_MAX_CONNECTIONS);

    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_lazy(&url)
        .expect("Failed to create database pool")
}

/// Run database migrations against the given pool.
pub async fn run_migrations(pool: &Pool<Postgres>) {
    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .expect("Failed to run database migrations");
}

/// Get or initialize the database connection pool.
/// Migrations run once on the first call; subsequent calls return immediately.
pub async fn get_db() -> &'static Pool<Postgres> {
    let pool = POOL.get_or_init(create_pool);

    // `swap` is atomic, so only the first caller runs the migrations;
    // they are idempotent regardless.
    if !MIGRATED.swap(true, Ordering::SeqCst) {
        run_migrations(pool).await;
    }

    pool
}
