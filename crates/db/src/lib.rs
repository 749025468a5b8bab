//! Database access layer for the DegreePath API.
//!
//! Provides pool construction, embedded migrations, a health check, and the
//! model/repository layers. All queries go through a shared [`DbPool`];
//! connections are checked out per query (or per transaction) and returned
//! on every exit path.

pub mod diagnostics;
pub mod error;
pub mod models;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;

pub use error::ConnectError;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
///
/// Eagerly establishes one connection so misconfiguration (bad credentials,
/// missing database, unreachable server) is reported at startup rather than
/// on the first request.
pub async fn create_pool(database_url: &str) -> Result<DbPool, ConnectError> {
    tracing::debug!(max_connections = 20, "Creating database connection pool");
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
        .map_err(ConnectError::from)
}

/// Verify the database is reachable with a trivial round trip.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply any pending migrations from the workspace `migrations/` directory.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}
