use chrono::Utc;

use pagepulse_core::anonymize::anonymize;
use pagepulse_core::error::StoreError;
use pagepulse_core::event::PageView;

use crate::DuckDbStore;

impl DuckDbStore {
    /// Record one page view.
    ///
    /// Rejects an empty `path` with [`StoreError::Validation`] before
    /// anything touches the store. On valid input, captures the current UTC
    /// timestamp, anonymizes the raw client address, and appends the row.
    /// The raw address never reaches storage or the logs.
    ///
    /// Insert failures surface as [`StoreError::Storage`] and are not
    /// retried.
    pub async fn track_page_view(
        &self,
        path: &str,
        referrer: &str,
        user_agent: &str,
        raw_addr: &str,
    ) -> Result<(), StoreError> {
        if path.is_empty() {
            return Err(StoreError::Validation(
                "path must not be empty".to_string(),
            ));
        }

        let view = PageView {
            timestamp: Utc::now(),
            path: path.to_string(),
            referrer: referrer.to_string(),
            user_agent: user_agent.to_string(),
            ip_anonymized: anonymize(raw_addr),
        };

        self.insert_page_view(&view).await.map_err(StoreError::Storage)
    }
}
