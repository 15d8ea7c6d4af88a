//! Store access for the bookshelf service.
//!
//! Owns the SQLite connection pool, the one-shot schema bootstrap, the row
//! model and DTOs ([`models`]) and the query layer ([`repositories`]).

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::SqlitePool;

/// Create a connection pool from a database URL.
///
/// The database file is created if it does not exist yet.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Create a pool over a private in-memory database.
///
/// Limited to a single connection that never expires: every new SQLite
/// connection to `:memory:` would otherwise see its own empty database.
/// Not gated behind `#[cfg(test)]` so the `api` crate's tests can use it.
pub async fn create_in_memory_pool() -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::new().filename(":memory:");
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
}

/// Verify the store is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Create the `books` table if it does not exist. Safe to call on every start.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS books (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            title          TEXT    NOT NULL,
            author         TEXT    NOT NULL,
            published_year INTEGER NOT NULL,
            summary        TEXT
        )",
    )
    .execute(pool)
    .await?;
    tracing::debug!("books table ensured");
    Ok(())
}

/// Whether the `books` table is present, i.e. [`ensure_schema`] has run.
pub async fn books_table_exists(pool: &DbPool) -> Result<bool, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'books'",
    )
    .fetch_one(pool)
    .await?;
    Ok(count > 0)
}
