//! Aggregation report rows.
//!
//! Each report returns an ordered sequence of one of these types,
//! recomputed on demand; nothing here is persisted.

use serde::{Deserialize, Serialize};

/// Page views per calendar day, newest day first, at most 30 days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyStat {
    pub day: String,
    pub count: i64,
}

/// Distinct anonymized addresses per calendar day, newest day first,
/// at most 30 days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueVisitStat {
    pub day: String,
    pub count: i64,
}

/// Page views per path, most viewed first, top 10.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageStat {
    pub path: String,
    pub count: i64,
}

/// Page views per non-empty referrer, top 10.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferrerStat {
    pub referrer: String,
    pub count: i64,
}

/// Page views per device class (Mobile / Tablet / Desktop).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceStat {
    pub device: String,
    pub count: i64,
}

/// Page views per browser family, top 10.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserStat {
    pub browser: String,
    pub count: i64,
}
