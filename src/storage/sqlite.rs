//! SQLite-backed key-value store.
//!
//! A single `kv_entries` table holds every durable blob (per-user bookmark
//! mappings, the current session). rusqlite is synchronous, so calls are
//! moved onto the blocking pool and the connection is shared behind a
//! mutex.

use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use rusqlite::{params, Connection};

use crate::types::errors::StorageError;
use super::kv::KeyValueStore;

/// Durable key-value store over a SQLite database file.
pub struct SqliteKeyValueStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteKeyValueStore {
    /// Opens (or creates) the database at `path` and ensures the schema.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let conn = Connection::open(path)
            .map_err(|e| StorageError::Database(e.to_string()))?;
        Self::init_schema(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Opens an in-memory database; discarded on drop. Useful for tests.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StorageError::Database(e.to_string()))?;
        Self::init_schema(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Creates the `kv_entries` table if missing. Idempotent, safe to run
    /// on every open.
    fn init_schema(conn: &Connection) -> Result<(), StorageError> {
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             CREATE TABLE IF NOT EXISTS kv_entries (
                 key TEXT PRIMARY KEY,
                 value TEXT NOT NULL,
                 updated_at INTEGER NOT NULL
             );",
        )
        .map_err(|e| StorageError::Database(e.to_string()))
    }

    /// Current UNIX timestamp in seconds.
    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    fn conn(&self) -> Arc<Mutex<Connection>> {
        self.conn.clone()
    }
}

#[async_trait]
impl KeyValueStore for SqliteKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let conn = self.conn();
        let key = key.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = conn.lock().unwrap();
            match conn.query_row(
                "SELECT value FROM kv_entries WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            ) {
                Ok(value) => Ok(Some(value)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(StorageError::Database(e.to_string())),
            }
        })
        .await
        .map_err(|e| StorageError::Database(e.to_string()))?
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let conn = self.conn();
        let key = key.to_string();
        let value = value.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = conn.lock().unwrap();
            conn.execute(
                "INSERT INTO kv_entries (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, value, Self::now()],
            )
            .map(|_| ())
            .map_err(|e| StorageError::Database(e.to_string()))
        })
        .await
        .map_err(|e| StorageError::Database(e.to_string()))?
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let conn = self.conn();
        let key = key.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = conn.lock().unwrap();
            conn.execute("DELETE FROM kv_entries WHERE key = ?1", params![key])
                .map(|_| ())
                .map_err(|e| StorageError::Database(e.to_string()))
        })
        .await
        .map_err(|e| StorageError::Database(e.to_string()))?
    }
}
