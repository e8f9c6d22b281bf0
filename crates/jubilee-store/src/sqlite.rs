//! SQLite sentinel store.
//!
//! Models the shared external key-value store: several processes (and
//! co-tenant applications) may open the same database file. The claim is a
//! single upsert statement, so two concurrent claimants race inside the
//! engine and exactly one wins.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use jubilee_core::error::{JubileeError, Result};
use jubilee_core::traits::SentinelStore;
use rusqlite::Connection;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

pub struct SqliteSentinelStore {
    conn: Mutex<Connection>,
}

impl SqliteSentinelStore {
    /// Open (or create) the sentinel database at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)
            .map_err(|e| JubileeError::store_unavailable(format!("{}: {e}", path.display())))?;

        // Writers from other processes hold the file briefly; wait instead
        // of surfacing SQLITE_BUSY for every overlap.
        conn.busy_timeout(Duration::from_secs(5))
            .map_err(|e| JubileeError::store_unavailable(e.to_string()))?;

        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS sentinels (
                key        TEXT PRIMARY KEY,
                claimed_at INTEGER NOT NULL,
                expires_at INTEGER NOT NULL
            );",
        )
        .map_err(|e| JubileeError::store_unavailable(e.to_string()))?;

        tracing::debug!("Sentinel store opened: {}", path.display());
        Ok(Self { conn: Mutex::new(conn) })
    }
}

#[async_trait]
impl SentinelStore for SqliteSentinelStore {
    fn name(&self) -> &str {
        "sqlite"
    }

    async fn try_claim(&self, key: &str, expires_at: DateTime<Utc>) -> Result<bool> {
        let conn = self.conn.lock().map_err(|e| JubileeError::store(e.to_string()))?;
        let now = Utc::now().timestamp();

        // One statement: insert, or take over an expired row. A live row
        // leaves the WHERE false and changes() at 0, which is the signal
        // that another claimant got here first.
        let changed = conn
            .execute(
                "INSERT INTO sentinels (key, claimed_at, expires_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET
                     claimed_at = excluded.claimed_at,
                     expires_at = excluded.expires_at
                 WHERE sentinels.expires_at <= excluded.claimed_at",
                rusqlite::params![key, now, expires_at.timestamp()],
            )
            .map_err(|e| JubileeError::store_unavailable(e.to_string()))?;

        Ok(changed == 1)
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        let conn = self.conn.lock().map_err(|e| JubileeError::store(e.to_string()))?;
        let now = Utc::now().timestamp();
        let live: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sentinels WHERE key = ?1 AND expires_at > ?2",
                rusqlite::params![key, now],
                |row| row.get(0),
            )
            .map_err(|e| JubileeError::store_unavailable(e.to_string()))?;
        Ok(live > 0)
    }

    async fn ping(&self) -> Result<()> {
        let conn = self.conn.lock().map_err(|e| JubileeError::store(e.to_string()))?;
        conn.query_row("SELECT 1", [], |_| Ok(()))
            .map_err(|e| JubileeError::store_unavailable(e.to_string()))
    }
}
