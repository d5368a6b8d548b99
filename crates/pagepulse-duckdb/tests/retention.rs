use chrono::{Duration, SecondsFormat, Utc};

use pagepulse_core::store::PageViewStore;
use pagepulse_duckdb::{duckdb, DuckDbStore};

async fn insert_at(store: &DuckDbStore, timestamp: &str) {
    let conn = store.conn_for_test().await;
    conn.execute(
        "INSERT INTO page_views (timestamp, path, referrer, user_agent, ip_anonymized) \
         VALUES (?1, '/', '', '', '10.0.0.0')",
        duckdb::params![timestamp],
    )
    .expect("insert");
}

async fn row_count(store: &DuckDbStore) -> i64 {
    let conn = store.conn_for_test().await;
    conn.prepare("SELECT COUNT(*) FROM page_views")
        .expect("prepare")
        .query_row([], |row| row.get(0))
        .expect("count")
}

fn stamp(offset: Duration) -> String {
    (Utc::now() + offset).to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[tokio::test]
async fn horizon_zero_deletes_everything_older_than_now() {
    let store = DuckDbStore::open_in_memory().expect("store");
    insert_at(&store, &stamp(Duration::days(-10))).await;
    insert_at(&store, &stamp(Duration::seconds(-5))).await;
    // Stamped after "now" at sweep time; must survive.
    insert_at(&store, &stamp(Duration::days(1))).await;

    let deleted = store.delete_older_than(0).await.expect("sweep");
    assert_eq!(deleted, 2);
    assert_eq!(row_count(&store).await, 1);
}

#[tokio::test]
async fn horizon_keeps_events_inside_the_window() {
    let store = DuckDbStore::open_in_memory().expect("store");
    insert_at(&store, &stamp(Duration::days(-100))).await;
    insert_at(&store, &stamp(Duration::days(-120))).await;
    insert_at(&store, &stamp(Duration::days(-10))).await;
    insert_at(&store, &stamp(Duration::seconds(-1))).await;

    let deleted = store.delete_older_than(90).await.expect("sweep");
    assert_eq!(deleted, 2);
    assert_eq!(row_count(&store).await, 2);
}

#[tokio::test]
async fn repeated_sweeps_are_idempotent() {
    let store = DuckDbStore::open_in_memory().expect("store");
    insert_at(&store, &stamp(Duration::days(-100))).await;

    assert_eq!(store.delete_older_than(90).await.expect("sweep"), 1);
    assert_eq!(store.delete_older_than(90).await.expect("sweep"), 0);
}

#[tokio::test]
async fn open_starts_sweeper_and_close_stops_it() {
    let dir = std::env::temp_dir().join(format!("pagepulse-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("tmp dir");
    let path = dir.join("retention.db");
    let path = path.to_str().expect("utf8 path");

    let store = DuckDbStore::open(path, 90).expect("open");
    // The first interval tick fires immediately; give the sweep a moment
    // to run against the empty table, then shut down.
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    store
        .track_page_view("/", "", "Mozilla/5.0", "10.0.0.1")
        .await
        .expect("track");
    store.close().await.expect("close");

    // The store stays queryable after close; only the sweeper is gone and
    // pending writes are checkpointed.
    assert_eq!(row_count(&store).await, 1);
    drop(store);
    std::fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn close_via_trait_object() {
    let store: std::sync::Arc<dyn PageViewStore> =
        std::sync::Arc::new(DuckDbStore::open_in_memory().expect("store"));
    store
        .track("/home", "", "Chrome/98.0", "10.0.0.1")
        .await
        .expect("track");
    assert_eq!(store.top_pages().await.expect("pages").len(), 1);
    store.close().await.expect("close");
}
