use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::Mutex;

use pagepulse_core::{config::Config, store::PageViewStore};
use pagepulse_duckdb::DuckDbStore;

/// Shared application state injected into every Axum handler via
/// [`axum::extract::State`].
pub struct AppState {
    /// The concrete DuckDB store, used where backend-specific operations
    /// (liveness ping) are needed.
    pub db: Arc<DuckDbStore>,

    /// The same store behind the trait seam the handlers consume.
    pub store: Arc<dyn PageViewStore>,

    /// Parsed configuration, loaded once at startup from environment
    /// variables.
    pub config: Arc<Config>,

    /// Global sliding-window rate limiter for GET /track: a deque of
    /// request timestamps within the last 60 seconds. The budget is
    /// `config.rate_limit_per_minute`.
    rate_limiter: Mutex<VecDeque<Instant>>,
}

impl AppState {
    pub fn new(db: DuckDbStore, config: Config) -> Self {
        let db = Arc::new(db);
        Self {
            store: Arc::clone(&db) as Arc<dyn PageViewStore>,
            db,
            config: Arc::new(config),
            rate_limiter: Mutex::new(VecDeque::new()),
        }
    }

    /// Check whether another tracking request fits in the per-minute
    /// budget. Returns `true` if the request should proceed, `false` if it
    /// should be rejected with 429. Slides the window on every call.
    pub async fn check_rate_limit(&self) -> bool {
        let mut window = self.rate_limiter.lock().await;
        // checked_sub: the monotonic clock can read under 60 s early after
        // boot, in which case nothing is old enough to evict.
        if let Some(cutoff) = Instant::now().checked_sub(std::time::Duration::from_secs(60)) {
            while window.front().is_some_and(|t| *t < cutoff) {
                window.pop_front();
            }
        }
        if window.len() >= self.config.rate_limit_per_minute as usize {
            return false;
        }
        window.push_back(Instant::now());
        true
    }
}
