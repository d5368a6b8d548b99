pub mod anonymize;
pub mod classify;
pub mod config;
pub mod error;
pub mod event;
pub mod stats;
pub mod store;
