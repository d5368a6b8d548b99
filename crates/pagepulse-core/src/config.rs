#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_dir: String,
    /// Age threshold in days beyond which events are purged by the sweeper.
    pub retention_days: u32,
    /// Basic-auth credentials for the stats API. Auth is enforced only when
    /// both are set; otherwise the API is open and a warning is logged at
    /// startup.
    pub dashboard_user: Option<String>,
    pub dashboard_pass: Option<String>,
    /// Global request budget per minute on the tracking endpoint.
    pub rate_limit_per_minute: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            port: std::env::var("PAGEPULSE_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|e| format!("invalid PAGEPULSE_PORT: {e}"))?,
            data_dir: std::env::var("PAGEPULSE_DATA_DIR")
                .unwrap_or_else(|_| "./data".to_string()),
            retention_days: std::env::var("RETENTION_DAYS")
                .unwrap_or_else(|_| "90".to_string())
                .parse()
                .map_err(|e| format!("invalid RETENTION_DAYS: {e}"))?,
            dashboard_user: std::env::var("DASHBOARD_USER").ok(),
            dashboard_pass: std::env::var("DASHBOARD_PASS").ok(),
            rate_limit_per_minute: std::env::var("PAGEPULSE_RATE_LIMIT")
                .unwrap_or_else(|_| "100".to_string())
                .parse()
                .map_err(|e| format!("invalid PAGEPULSE_RATE_LIMIT: {e}"))?,
        })
    }

    /// True when the stats API requires Basic auth.
    pub fn auth_enabled(&self) -> bool {
        self.dashboard_user.is_some() && self.dashboard_pass.is_some()
    }
}
