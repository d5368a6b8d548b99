//! DuckDB initialization SQL.
//!
//! Executed at database open time via `Connection::execute_batch`. All
//! statements use `IF NOT EXISTS` so the batch is safe to re-run on every
//! startup (idempotent).
//!
//! `id` comes from a sequence rather than a UUID: insertion order defines
//! id order, and the sequence guarantees strictly increasing values.
//! `timestamp` is bound as an RFC 3339 UTC string at insert time and cast
//! by DuckDB into the TIMESTAMP column.
pub const INIT_SQL: &str = r#"
SET threads = 2;

CREATE SEQUENCE IF NOT EXISTS page_views_id_seq;

CREATE TABLE IF NOT EXISTS page_views (
    id              BIGINT PRIMARY KEY DEFAULT nextval('page_views_id_seq'),
    timestamp       TIMESTAMP NOT NULL,
    path            VARCHAR NOT NULL,
    referrer        VARCHAR,
    user_agent      VARCHAR,
    ip_anonymized   VARCHAR
);

-- Daily reports and the retention sweep both scan by time.
CREATE INDEX IF NOT EXISTS idx_page_views_timestamp ON page_views(timestamp);
-- Top-pages grouping.
CREATE INDEX IF NOT EXISTS idx_page_views_path ON page_views(path);
"#;
