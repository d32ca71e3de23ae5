//! SQLite-backed key-value store.
//!
//! # Responsibility
//! - Persist store blobs in the `kv_entries` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - `set` is an upsert; `updated_at` advances on every overwrite.
//! - The connection has migrations applied before first use.

use super::{check_quota, KvStore, StoreError, StoreResult, DEFAULT_QUOTA_BYTES};
use crate::db::{open_db, open_db_in_memory};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// Durable store over a migrated SQLite connection.
pub struct SqliteKvStore {
    conn: Connection,
    quota_bytes: Option<usize>,
}

impl SqliteKvStore {
    /// Opens (and migrates) the store database at `path`.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let conn = open_db(path).map_err(|err| StoreError::Backend(err.to_string()))?;
        Ok(Self {
            conn,
            quota_bytes: Some(DEFAULT_QUOTA_BYTES),
        })
    }

    /// Opens an in-memory store, mainly for tests.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = open_db_in_memory().map_err(|err| StoreError::Backend(err.to_string()))?;
        Ok(Self {
            conn,
            quota_bytes: Some(DEFAULT_QUOTA_BYTES),
        })
    }

    /// Overrides the write quota. `None` disables the limit.
    pub fn with_quota(mut self, quota_bytes: Option<usize>) -> Self {
        self.quota_bytes = quota_bytes;
        self
    }
}

impl KvStore for SqliteKvStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        check_quota(key, value, self.quota_bytes)?;
        self.conn.execute(
            "INSERT INTO kv_entries (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::SqliteKvStore;
    use crate::store::{KvStore, StoreError};

    #[test]
    fn upsert_overwrites_whole_value() {
        let mut store = SqliteKvStore::open_in_memory().unwrap();
        store.set("siteDataV1", "{\"a\":1}").unwrap();
        store.set("siteDataV1", "{\"b\":2}").unwrap();
        assert_eq!(
            store.get("siteDataV1").unwrap().as_deref(),
            Some("{\"b\":2}")
        );
    }

    #[test]
    fn quota_applies_to_sqlite_backend_too() {
        let mut store = SqliteKvStore::open_in_memory().unwrap().with_quota(Some(8));
        let err = store.set("k", "0123456789").unwrap_err();
        assert!(matches!(err, StoreError::QuotaExceeded { .. }));
        assert_eq!(store.get("k").unwrap(), None);
    }
}
