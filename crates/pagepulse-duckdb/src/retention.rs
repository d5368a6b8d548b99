//! Background retention sweeper.
//!
//! One long-lived task per store, spawned at open time and aborted by
//! `DuckDbStore::close` so nothing outlives shutdown. The loop alternates
//! between waiting on a 24-hour interval and a single bulk delete; a failed
//! sweep is logged and retried on the next cycle, never propagated and
//! never fatal to the loop.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use duckdb::Connection;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Sweep cadence. The first tick of `tokio::time::interval` fires
/// immediately, so a sweep also runs right after the store opens.
const SWEEP_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

/// Delete all rows strictly older than `now - horizon_days`.
///
/// The cutoff is computed from this process's clock at call time, so a
/// horizon of 0 removes everything with a timestamp in the past while rows
/// stamped at or after "now" survive.
pub(crate) fn delete_older_than_sync(conn: &Connection, horizon_days: u32) -> Result<usize> {
    let cutoff = (Utc::now() - chrono::Duration::days(i64::from(horizon_days)))
        .naive_utc()
        .format("%Y-%m-%d %H:%M:%S%.6f")
        .to_string();
    let deleted = conn.execute(
        "DELETE FROM page_views WHERE timestamp < ?1",
        duckdb::params![cutoff],
    )?;
    Ok(deleted)
}

/// Run one sweep cycle, logging the outcome either way.
pub(crate) async fn sweep_once(conn: &Arc<Mutex<Connection>>, horizon_days: u32) {
    let conn = conn.lock().await;
    match delete_older_than_sync(&conn, horizon_days) {
        Ok(rows) => info!(rows, horizon_days, "Retention sweep complete"),
        Err(e) => error!(error = %e, "Retention sweep failed, retrying next cycle"),
    }
}

/// Spawn the sweeper loop. The returned handle is kept by the store and
/// aborted on close.
pub(crate) fn spawn_sweeper(conn: Arc<Mutex<Connection>>, horizon_days: u32) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SWEEP_INTERVAL);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            sweep_once(&conn, horizon_days).await;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::schema::INIT_SQL;

    // A broken table must not take the sweeper down with it: the cycle
    // logs the failure and the next cycle works once storage is healthy.
    #[tokio::test]
    async fn failed_sweep_leaves_later_sweeps_working() {
        let conn = Connection::open_in_memory().expect("conn");
        conn.execute_batch(INIT_SQL).expect("init");
        let conn = Arc::new(Mutex::new(conn));

        {
            let guard = conn.lock().await;
            guard.execute_batch("DROP TABLE page_views").expect("drop");
        }
        sweep_once(&conn, 90).await;

        {
            let guard = conn.lock().await;
            guard.execute_batch(INIT_SQL).expect("reinit");
            guard
                .execute(
                    "INSERT INTO page_views (timestamp, path, referrer, user_agent, ip_anonymized) \
                     VALUES ('2000-01-01 00:00:00', '/', '', '', '10.0.0.0')",
                    [],
                )
                .expect("insert");
        }
        sweep_once(&conn, 90).await;

        let guard = conn.lock().await;
        let remaining: i64 = guard
            .prepare("SELECT COUNT(*) FROM page_views")
            .expect("prepare")
            .query_row([], |row| row.get(0))
            .expect("count");
        assert_eq!(remaining, 0);
    }
}
