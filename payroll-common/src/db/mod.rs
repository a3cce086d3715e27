//! Database access layer
//!
//! Single-file SQLite store. The schema is created on startup if absent;
//! `CREATE TABLE IF NOT EXISTS` keeps initialization idempotent.

use crate::Result;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::path::Path;
use tracing::info;

pub mod employees;
pub use employees::PayrollTotals;

/// Initialize database connection pool and create tables if needed
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    // Create parent directory if it doesn't exist
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    // mode=rwc: read, write, create
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect(&db_url)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    // Enable foreign keys
    sqlx::query("PRAGMA foreign_keys = ON").execute(&pool).await?;

    // WAL allows concurrent readers with one writer
    sqlx::query("PRAGMA journal_mode = WAL").execute(&pool).await?;

    // Wait on the write lock instead of failing fast
    sqlx::query("PRAGMA busy_timeout = 5000").execute(&pool).await?;

    create_employees_table(&pool).await?;

    Ok(pool)
}

/// Create the employees table (idempotent)
///
/// employee_id is UNIQUE but nullable; SQLite permits any number of NULLs
/// under a unique index, so rows ingested without an identifier never
/// collide with each other.
async fn create_employees_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id TEXT PRIMARY KEY,
            employee_id TEXT UNIQUE,
            name TEXT,
            age INTEGER,
            gender TEXT,
            department TEXT,
            job_role TEXT,
            monthly_income REAL NOT NULL DEFAULT 0,
            years_at_company INTEGER,
            overtime INTEGER NOT NULL DEFAULT 0,
            attrition INTEGER NOT NULL DEFAULT 0,
            performance_rating INTEGER
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
