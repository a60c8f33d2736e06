//! SQLite pool construction and schema DDL.

use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

const LABORATORY_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS laboratory (
    id      INTEGER PRIMARY KEY AUTOINCREMENT,
    name    TEXT NOT NULL,
    contact TEXT
)
"#;

const STUDENT_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS student (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    name          TEXT NOT NULL,
    email         TEXT NOT NULL,
    birth_date    TEXT NOT NULL,
    laboratory_id INTEGER REFERENCES laboratory(id)
)
"#;

/// Open a pool on `database_url`, creating the database file if missing.
/// Foreign keys are enforced on every connection.
pub async fn connect(database_url: &str) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| AppError::BadRequest(format!("invalid DATABASE_URL: {}", e)))?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await?;
    Ok(pool)
}

/// In-memory pool for tests. A single never-recycled connection keeps the
/// memory database alive for the pool's lifetime.
pub async fn open_in_memory() -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str("sqlite::memory:")
        .map_err(AppError::Db)?
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .min_connections(1)
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(opts)
        .await?;
    Ok(pool)
}

/// Create the two tables if they do not exist. Safe to run at every startup.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query(LABORATORY_DDL).execute(pool).await?;
    sqlx::query(STUDENT_DDL).execute(pool).await?;
    Ok(())
}
