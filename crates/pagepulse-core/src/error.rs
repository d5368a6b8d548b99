use thiserror::Error;

/// Errors surfaced by the event store and ingestion path.
///
/// `Validation` means the caller's input violated a precondition and nothing
/// touched storage; the HTTP layer maps it to a client error. `Storage`
/// wraps any failure communicating with or executing against the underlying
/// engine and maps to a server error. Neither is retried at ingestion or
/// query time; sweep failures are handled inside the sweeper loop and never
/// reach callers.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("storage error: {0}")]
    Storage(#[source] anyhow::Error),
}

impl StoreError {
    pub fn storage(err: impl Into<anyhow::Error>) -> Self {
        Self::Storage(err.into())
    }
}

impl From<anyhow::Error> for StoreError {
    fn from(err: anyhow::Error) -> Self {
        Self::Storage(err)
    }
}
