//! PostgreSQL storage backend.

use async_trait::async_trait;
use bb8::Pool;
use bb8_postgres::PostgresConnectionManager;
use tokio_postgres::error::SqlState;
use tokio_postgres::{NoTls, Row};

use crate::error::{StoreError, StoreResult};
use crate::models::PackageRecord;
use crate::traits::PackageStore;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS packages (
        name TEXT PRIMARY KEY,
        url  TEXT NOT NULL,
        hits BIGINT NOT NULL DEFAULT 0
    )
";

/// PostgreSQL registry backend.
///
/// Connections come from a `bb8` pool; name uniqueness is enforced by
/// the primary key, and the hit counter lives entirely in the table.
pub struct PostgresStore {
    pool: Pool<PostgresConnectionManager<NoTls>>,
}

impl PostgresStore {
    /// Connect to the database described by a connection string, e.g.
    /// `host=localhost user=depot dbname=depot`.
    pub async fn connect(conn_str: &str) -> StoreResult<Self> {
        let manager = PostgresConnectionManager::new_from_stringlike(conn_str, NoTls)
            .map_err(StoreError::backend)?;
        let pool = Pool::builder()
            .build(manager)
            .await
            .map_err(StoreError::backend)?;
        Ok(Self { pool })
    }

    /// Create the packages table if it does not exist yet.
    pub async fn initialize(&self) -> StoreResult<()> {
        let conn = self.pool.get().await.map_err(StoreError::backend)?;
        conn.batch_execute(SCHEMA).await.map_err(StoreError::backend)?;
        Ok(())
    }
}

fn record_from_row(row: &Row) -> PackageRecord {
    PackageRecord {
        name: row.get("name"),
        url: row.get("url"),
        hits: row.get("hits"),
    }
}

/// Escape `%`, `_`, and `\` so a search pattern matches literally
/// inside a LIKE expression.
fn escape_like_pattern(pattern: &str) -> String {
    pattern
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[async_trait]
impl PackageStore for PostgresStore {
    async fn get_packages(&self) -> StoreResult<Vec<PackageRecord>> {
        let conn = self.pool.get().await.map_err(StoreError::backend)?;
        let rows = conn
            .query("SELECT name, url, hits FROM packages ORDER BY name", &[])
            .await
            .map_err(StoreError::backend)?;
        Ok(rows.iter().map(record_from_row).collect())
    }

    async fn get_package(&self, name: &str) -> StoreResult<PackageRecord> {
        let conn = self.pool.get().await.map_err(StoreError::backend)?;
        let row = conn
            .query_opt(
                "SELECT name, url, hits FROM packages WHERE name = $1",
                &[&name],
            )
            .await
            .map_err(StoreError::backend)?;

        match row {
            Some(row) => Ok(record_from_row(&row)),
            None => Err(StoreError::PackageNotFound {
                name: name.to_string(),
            }),
        }
    }

    async fn insert_package(&self, name: &str, url: &str) -> StoreResult<()> {
        let conn = self.pool.get().await.map_err(StoreError::backend)?;
        conn.execute(
            "INSERT INTO packages (name, url) VALUES ($1, $2)",
            &[&name, &url],
        )
        .await
        .map_err(|err| {
            if err.code() == Some(&SqlState::UNIQUE_VIOLATION) {
                StoreError::PackageAlreadyExists {
                    name: name.to_string(),
                }
            } else {
                StoreError::backend(err)
            }
        })?;
        Ok(())
    }

    async fn search_packages(&self, pattern: &str) -> StoreResult<Vec<PackageRecord>> {
        let conn = self.pool.get().await.map_err(StoreError::backend)?;
        let like = format!("%{}%", escape_like_pattern(pattern));
        let rows = conn
            .query(
                "SELECT name, url, hits FROM packages WHERE name LIKE $1 ORDER BY name",
                &[&like],
            )
            .await
            .map_err(StoreError::backend)?;
        Ok(rows.iter().map(record_from_row).collect())
    }
}
