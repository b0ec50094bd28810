//! Database module: storage adapters and schema for persistent content.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `kv.rs`: key-value adapter for the singleton profile document
//! - `store.rs`: relational adapter for projects, links and contacts

pub mod kv;
pub mod models;
pub mod schema;
pub mod store;

pub use kv::KvStore;
pub use models::{ContactRow, LinkRow, ProjectRow};
pub use schema::SQLITE_INIT;
pub use store::Store;

use crate::error::FolioError;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::{str::FromStr, time::Duration};
use tracing::info;

/// Opens the SQLite pool and applies the schema before anything can query it.
pub async fn connect(database_url: &str) -> Result<SqlitePool, FolioError> {
    let connect_opts = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(5))
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal);

    let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;

    apply_schema(&pool).await?;

    info!("database initialized");
    Ok(pool)
}

async fn apply_schema(pool: &SqlitePool) -> Result<(), FolioError> {
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}
