pub mod backend;
pub mod ingest;
pub mod reports;
pub mod retention;
pub mod schema;
mod store_impl;

pub use backend::DuckDbStore;

/// Re-export the `duckdb` crate so consumers (especially tests) can use
/// `pagepulse_duckdb::duckdb::params!` without an extra dependency.
pub use duckdb;
