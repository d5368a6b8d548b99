use std::sync::Arc;
use std::sync::Mutex as StdMutex;

use anyhow::Result;
use chrono::SecondsFormat;
use duckdb::Connection;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::info;

use pagepulse_core::event::PageView;

use crate::retention;
use crate::schema::INIT_SQL;

/// A DuckDB-backed page-view store.
///
/// DuckDB is single-writer: concurrent reads are fine, but concurrent writes
/// cause contention. We wrap the connection in `Arc<Mutex<_>>` so the async
/// runtime serialises all access while the struct stays cheap to clone and
/// share across Axum handlers and the background sweeper.
pub struct DuckDbStore {
    pub(crate) conn: Arc<Mutex<Connection>>,
    /// Handle of the retention sweeper task, taken and aborted by [`close`].
    ///
    /// [`close`]: DuckDbStore::close
    sweeper: StdMutex<Option<JoinHandle<()>>>,
}

impl DuckDbStore {
    /// Open (or create) a DuckDB database file at `path` and start the
    /// retention sweeper with the given horizon.
    ///
    /// Runs [`INIT_SQL`] on the connection so the table, sequence, and
    /// indexes are created if they do not already exist. Must be called
    /// from within a tokio runtime, since the sweeper is spawned here so that
    /// its lifetime is owned by the store rather than left detached.
    pub fn open(path: &str, retention_days: u32) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(INIT_SQL)?;
        let conn = Arc::new(Mutex::new(conn));
        let sweeper = retention::spawn_sweeper(Arc::clone(&conn), retention_days);
        info!(path, retention_days, "DuckDB store opened");
        Ok(Self {
            conn,
            sweeper: StdMutex::new(Some(sweeper)),
        })
    }

    /// Open an **in-memory** store without a sweeper.
    ///
    /// Intended for tests; data is discarded when the struct is dropped,
    /// and retention is exercised directly via [`delete_older_than`].
    ///
    /// [`delete_older_than`]: DuckDbStore::delete_older_than
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(INIT_SQL)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            sweeper: StdMutex::new(None),
        })
    }

    /// Append one row. The `id` is assigned by the sequence; the timestamp
    /// is bound as an RFC 3339 UTC string at second precision.
    pub(crate) async fn insert_page_view(&self, view: &PageView) -> Result<()> {
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO page_views (timestamp, path, referrer, user_agent, ip_anonymized) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            duckdb::params![
                view.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
                view.path,
                view.referrer,
                view.user_agent,
                view.ip_anonymized,
            ],
        )?;
        Ok(())
    }

    /// Delete all events older than `now - horizon_days`, evaluated against
    /// this process's clock at call time. Returns the number of rows
    /// removed. Horizon 0 deletes everything strictly older than now.
    pub async fn delete_older_than(&self, horizon_days: u32) -> Result<usize> {
        let conn = self.conn.lock().await;
        retention::delete_older_than_sync(&conn, horizon_days)
    }

    /// Execute `SELECT 1` as a lightweight liveness check.
    ///
    /// Called by the `/health` endpoint. Returns an error if the connection
    /// is unavailable (file locked, disk full, etc.).
    pub async fn ping(&self) -> Result<()> {
        let conn = self.conn.lock().await;
        conn.execute_batch("SELECT 1")?;
        Ok(())
    }

    /// Stop the retention sweeper and flush pending writes to disk.
    ///
    /// The connection itself is released when the last reference to the
    /// store is dropped; after `close` no background task outlives the
    /// store.
    pub async fn close(&self) -> Result<()> {
        // A poisoned lock still hands over the handle; the task must not
        // outlive close.
        let handle = self
            .sweeper
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();
        if let Some(handle) = handle {
            handle.abort();
        }
        let conn = self.conn.lock().await;
        conn.execute_batch("CHECKPOINT")?;
        Ok(())
    }

    /// Acquire the connection lock for direct queries.
    ///
    /// Intended for integration tests that need to verify stored data.
    /// Production code should use the typed methods.
    pub async fn conn_for_test(&self) -> tokio::sync::MutexGuard<'_, Connection> {
        self.conn.lock().await
    }
}
