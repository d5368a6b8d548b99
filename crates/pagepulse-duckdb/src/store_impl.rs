//! [`PageViewStore`] implementation for [`DuckDbStore`]: thin delegation
//! so the HTTP layer can hold an `Arc<dyn PageViewStore>`.

use pagepulse_core::error::StoreError;
use pagepulse_core::stats::{
    BrowserStat, DailyStat, DeviceStat, PageStat, ReferrerStat, UniqueVisitStat,
};
use pagepulse_core::store::PageViewStore;

use crate::DuckDbStore;

#[async_trait::async_trait]
impl PageViewStore for DuckDbStore {
    async fn track(
        &self,
        path: &str,
        referrer: &str,
        user_agent: &str,
        raw_addr: &str,
    ) -> Result<(), StoreError> {
        self.track_page_view(path, referrer, user_agent, raw_addr)
            .await
    }

    async fn daily_stats(&self) -> Result<Vec<DailyStat>, StoreError> {
        DuckDbStore::daily_stats(self).await
    }

    async fn unique_visits(&self) -> Result<Vec<UniqueVisitStat>, StoreError> {
        DuckDbStore::unique_visits(self).await
    }

    async fn top_pages(&self) -> Result<Vec<PageStat>, StoreError> {
        DuckDbStore::top_pages(self).await
    }

    async fn referrers(&self) -> Result<Vec<ReferrerStat>, StoreError> {
        DuckDbStore::referrers(self).await
    }

    async fn devices(&self) -> Result<Vec<DeviceStat>, StoreError> {
        DuckDbStore::devices(self).await
    }

    async fn browsers(&self) -> Result<Vec<BrowserStat>, StoreError> {
        DuckDbStore::browsers(self).await
    }

    async fn close(&self) -> Result<(), StoreError> {
        DuckDbStore::close(self).await.map_err(StoreError::Storage)
    }
}
