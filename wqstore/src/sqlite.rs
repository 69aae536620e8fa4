//! Stockage durable de la file sur SQLite

use crate::item::VideoItem;
use crate::store::QueueStore;
use crate::{Error, Result};
use async_trait::async_trait;
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::warn;

/// Storage key holding the serialized queue
pub const QUEUE_KEY: &str = "video_queue";

/// Storage key holding the last remote fetch timestamp
pub const LAST_FETCH_KEY: &str = "last_gist_fetch";

/// Durable queue store backed by a single key-value table in SQLite
///
/// The queue is serialized as one JSON array under [`QUEUE_KEY`]; the
/// last-fetch timestamp is stored as integer text under [`LAST_FETCH_KEY`].
pub struct SqliteQueueStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteQueueStore {
    /// Opens (or creates) the database at `db_path` and prepares the schema
    pub fn new(db_path: &Path) -> Result<Self> {
        // Créer le répertoire parent si nécessaire
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::PersistenceError(format!("Failed to create directory: {}", e))
            })?;
        }

        let conn = Connection::open(db_path)
            .map_err(|e| Error::PersistenceError(format!("Failed to open database: {}", e)))?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS store (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )
        .map_err(|e| Error::PersistenceError(format!("Failed to create store table: {}", e)))?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn read_key(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn.lock().unwrap();
        let result = conn.query_row(
            "SELECT value FROM store WHERE key = ?1",
            params![key],
            |row| row.get(0),
        );
        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(Error::PersistenceError(format!(
                "Failed to read key {}: {}",
                key, e
            ))),
        }
    }

    fn write_key(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT OR REPLACE INTO store (key, value) VALUES (?1, ?2)",
            params![key, value],
        )
        .map_err(|e| Error::PersistenceError(format!("Failed to write key {}: {}", key, e)))?;
        Ok(())
    }

    fn delete_key(&self, key: &str) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute("DELETE FROM store WHERE key = ?1", params![key])
            .map_err(|e| {
                Error::PersistenceError(format!("Failed to delete key {}: {}", key, e))
            })?;
        Ok(())
    }
}

#[async_trait]
impl QueueStore for SqliteQueueStore {
    async fn load_queue(&self) -> Result<Vec<VideoItem>> {
        let raw = match self.read_key(QUEUE_KEY)? {
            Some(raw) => raw,
            None => return Ok(Vec::new()),
        };

        match serde_json::from_str(&raw) {
            Ok(queue) => Ok(queue),
            Err(e) => {
                warn!("SqliteQueueStore: corrupt queue record, treating as empty: {}", e);
                Ok(Vec::new())
            }
        }
    }

    async fn save_queue(&self, queue: &[VideoItem]) -> Result<()> {
        let payload = serde_json::to_string(queue)?;
        self.write_key(QUEUE_KEY, &payload)
    }

    async fn clear_queue(&self) -> Result<()> {
        self.delete_key(QUEUE_KEY)
    }

    async fn save_last_fetch_time(&self) -> Result<()> {
        let now_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64;
        self.write_key(LAST_FETCH_KEY, &now_ms.to_string())
    }

    async fn last_fetch_time(&self) -> Result<u64> {
        match self.read_key(LAST_FETCH_KEY)? {
            // Valeur illisible : on repart de zéro
            Some(raw) => Ok(raw.parse().unwrap_or(0)),
            None => Ok(0),
        }
    }
}
