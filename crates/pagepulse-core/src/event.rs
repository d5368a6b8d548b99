use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One page-view event as written to the store.
///
/// The surrogate `id` is not part of this struct: the store assigns it from
/// a sequence at insert time, so ids are unique and strictly increasing in
/// insertion order. `ip_anonymized` only ever holds the output of the
/// anonymizer, never a raw client address. Events are immutable once
/// written; the only mutation on the table is the sweeper's bulk delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageView {
    /// Event time, UTC. Stored as an RFC 3339 string at second precision.
    pub timestamp: DateTime<Utc>,
    /// The visited resource. Never empty; validated at ingestion.
    pub path: String,
    /// May be empty for direct hits.
    pub referrer: String,
    pub user_agent: String,
    /// Output of `anonymize`, including its `"unknown"` sentinel.
    pub ip_anonymized: String,
}
