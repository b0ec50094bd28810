use crate::error::FolioError;
use serde_json::Value;
use sqlx::SqlitePool;

/// Key-value adapter over the `kv` table.
///
/// Backs the singleton profile document; the record under a key is written
/// wholesale, there is no partial update.
#[derive(Clone)]
pub struct KvStore {
    pool: SqlitePool,
}

impl KvStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Reads the JSON document stored under `key`. A missing key is `None`,
    /// never an error.
    pub async fn get(&self, key: &str) -> Result<Option<Value>, FolioError> {
        let raw: Option<String> = sqlx::query_scalar(
            r#"
        SELECT value FROM kv WHERE key = ?
        "#,
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        match raw {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Writes `value` under `key`, replacing whatever was there.
    pub async fn put(&self, key: &str, value: &Value) -> Result<(), FolioError> {
        sqlx::query(
            r#"
        INSERT INTO kv (key, value)
        VALUES (?, ?)
        ON CONFLICT(key) DO UPDATE SET value = excluded.value
        "#,
        )
        .bind(key)
        .bind(value.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
