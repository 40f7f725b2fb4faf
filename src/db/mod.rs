use anyhow::Result;
use sqlx::{
    Pool, Sqlite,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::{str::FromStr, time::Duration};

pub mod session;
pub mod user_store;

pub use session::DbSession;

pub type DbPool = Pool<Sqlite>;

/// Initialize the database connection pool
pub async fn init_db_pool(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<DbPool> {
    // Create the database if it doesn't exist
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect_with(options)
        .await?;

    setup_database(&pool).await?;

    Ok(pool)
}

/// Set up the database schema
pub(crate) async fn setup_database(pool: &DbPool) -> Result<()> {
    // AUTOINCREMENT keeps ids of deleted rows from being handed out again
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            is_admin BOOLEAN NOT NULL DEFAULT 0
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS ix_users_first_name ON users (first_name);")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS ix_users_last_name ON users (last_name);")
        .execute(pool)
        .await?;

    tracing::debug!("users schema ready");

    Ok(())
}

/// Single-connection in-memory pool with the schema applied
#[cfg(test)]
pub(crate) async fn memory_pool() -> DbPool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    setup_database(&pool)
        .await
        .expect("Failed to create schema");

    pool
}
