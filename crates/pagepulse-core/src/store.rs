//! Storage backend abstraction.

use crate::error::StoreError;
use crate::stats::{
    BrowserStat, DailyStat, DeviceStat, PageStat, ReferrerStat, UniqueVisitStat,
};

/// The interface the HTTP layer consumes.
///
/// All methods are safe to call concurrently from any number of request
/// tasks while the retention sweeper runs in the background; the backend
/// provides its own serialization. Every method may block on storage I/O;
/// callers must not hold any other exclusive resource while awaiting.
#[async_trait::async_trait]
pub trait PageViewStore: Send + Sync + 'static {
    /// Record one page view. Validates `path`, anonymizes `raw_addr`, and
    /// appends a row with the current UTC timestamp.
    async fn track(
        &self,
        path: &str,
        referrer: &str,
        user_agent: &str,
        raw_addr: &str,
    ) -> Result<(), StoreError>;

    /// Page views per day, last 30 days present in the table, newest first.
    async fn daily_stats(&self) -> Result<Vec<DailyStat>, StoreError>;

    /// Distinct anonymized addresses per day, last 30 days, newest first.
    async fn unique_visits(&self) -> Result<Vec<UniqueVisitStat>, StoreError>;

    /// Top 10 paths by view count.
    async fn top_pages(&self) -> Result<Vec<PageStat>, StoreError>;

    /// Top 10 non-empty referrers by view count.
    async fn referrers(&self) -> Result<Vec<ReferrerStat>, StoreError>;

    /// View counts per device class.
    async fn devices(&self) -> Result<Vec<DeviceStat>, StoreError>;

    /// Top 10 browser families by view count.
    async fn browsers(&self) -> Result<Vec<BrowserStat>, StoreError>;

    /// Stop the retention sweeper and flush the database. The underlying
    /// connection is released when the store is dropped.
    async fn close(&self) -> Result<(), StoreError>;
}
