//! Probe queries backing the `/test-db` diagnostics endpoint.

use sqlx::Row;

use crate::DbPool;

/// Name of the database the pool is actually connected to.
pub async fn current_database(pool: &DbPool) -> Result<String, sqlx::Error> {
    let row = sqlx::query("SELECT current_database()")
        .fetch_one(pool)
        .await?;
    row.try_get(0)
}

/// All table names visible in the `public` schema, alphabetical.
pub async fn list_public_tables(pool: &DbPool) -> Result<Vec<String>, sqlx::Error> {
    let rows = sqlx::query(
        "SELECT table_name
         FROM information_schema.tables
         WHERE table_schema = 'public'
         ORDER BY table_name",
    )
    .fetch_all(pool)
    .await?;

    rows.iter().map(|row| row.try_get("table_name")).collect()
}

/// Row count of the `programs` table.
pub async fn count_programs(pool: &DbPool) -> Result<i64, sqlx::Error> {
    let row = sqlx::query("SELECT COUNT(*) FROM programs")
        .fetch_one(pool)
        .await?;
    row.try_get(0)
}
