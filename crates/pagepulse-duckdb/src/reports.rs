//! The six aggregation reports.
//!
//! Every report has the same shape (group the `page_views` table by one
//! key expression, count a metric, order, limit), so they all run through a
//! single [`ReportSpec`] execution path and differ only in their spec and
//! the stat type the rows map into.

use pagepulse_core::classify::{DEVICE_DEFAULT, DEVICE_RULES};
use pagepulse_core::error::StoreError;
use pagepulse_core::stats::{
    BrowserStat, DailyStat, DeviceStat, PageStat, ReferrerStat, UniqueVisitStat,
};

use crate::DuckDbStore;

/// Calendar day of the event, as a `YYYY-MM-DD` string.
const DAY_EXPR: &str = "strftime(timestamp, '%Y-%m-%d')";

/// One grouped-count report over the `page_views` table.
#[derive(Debug, Clone)]
pub(crate) struct ReportSpec {
    /// SQL expression producing the grouping key (aliased `key`).
    key_expr: String,
    /// SQL aggregate producing the count (aliased `count`).
    metric_expr: &'static str,
    filter: Option<&'static str>,
    order_by: &'static str,
    limit: Option<u32>,
}

impl ReportSpec {
    fn counted(key_expr: impl Into<String>, order_by: &'static str, limit: Option<u32>) -> Self {
        Self {
            key_expr: key_expr.into(),
            metric_expr: "COUNT(*)",
            filter: None,
            order_by,
            limit,
        }
    }

    fn to_sql(&self) -> String {
        let mut sql = format!(
            "SELECT {} AS key, {} AS count FROM page_views",
            self.key_expr, self.metric_expr
        );
        if let Some(filter) = self.filter {
            sql.push_str(" WHERE ");
            sql.push_str(filter);
        }
        sql.push_str(" GROUP BY key ORDER BY ");
        sql.push_str(self.order_by);
        if let Some(limit) = self.limit {
            sql.push_str(&format!(" LIMIT {limit}"));
        }
        sql
    }
}

/// Render the ordered device rule table into a SQL `CASE` expression.
///
/// `LIKE` in DuckDB is case-sensitive, matching the in-process policy in
/// `pagepulse_core::classify`. Rule needles and labels are static
/// compile-time text, never user input.
fn device_case_expr() -> String {
    let mut expr = String::from("CASE");
    for (needle, label) in DEVICE_RULES {
        expr.push_str(&format!(
            " WHEN COALESCE(user_agent, '') LIKE '%{needle}%' THEN '{label}'"
        ));
    }
    expr.push_str(&format!(" ELSE '{DEVICE_DEFAULT}' END"));
    expr
}

impl DuckDbStore {
    /// Execute a report spec and map each `(key, count)` row into `T`.
    ///
    /// An empty table yields an empty vec, never an error.
    async fn run_report<T>(
        &self,
        spec: &ReportSpec,
        map: fn(String, i64) -> T,
    ) -> Result<Vec<T>, StoreError> {
        let conn = self.conn.lock().await;
        let scan = || -> duckdb::Result<Vec<T>> {
            let mut stmt = conn.prepare(&spec.to_sql())?;
            let rows = stmt.query_map([], |row| Ok(map(row.get(0)?, row.get(1)?)))?;
            rows.collect()
        };
        scan().map_err(StoreError::storage)
    }

    /// Page views per calendar day, newest day first, last 30 days present.
    pub async fn daily_stats(&self) -> Result<Vec<DailyStat>, StoreError> {
        let spec = ReportSpec::counted(DAY_EXPR, "key DESC", Some(30));
        self.run_report(&spec, |day, count| DailyStat { day, count })
            .await
    }

    /// Distinct anonymized addresses per calendar day, newest day first.
    pub async fn unique_visits(&self) -> Result<Vec<UniqueVisitStat>, StoreError> {
        let spec = ReportSpec {
            key_expr: DAY_EXPR.to_string(),
            metric_expr: "COUNT(DISTINCT ip_anonymized)",
            filter: None,
            order_by: "key DESC",
            limit: Some(30),
        };
        self.run_report(&spec, |day, count| UniqueVisitStat { day, count })
            .await
    }

    /// Top 10 paths by view count.
    pub async fn top_pages(&self) -> Result<Vec<PageStat>, StoreError> {
        let spec = ReportSpec::counted("path", "count DESC", Some(10));
        self.run_report(&spec, |path, count| PageStat { path, count })
            .await
    }

    /// Top 10 referrers by view count; empty referrers are excluded.
    pub async fn referrers(&self) -> Result<Vec<ReferrerStat>, StoreError> {
        let spec = ReportSpec {
            filter: Some("referrer IS NOT NULL AND referrer != ''"),
            ..ReportSpec::counted("referrer", "count DESC", Some(10))
        };
        self.run_report(&spec, |referrer, count| ReferrerStat { referrer, count })
            .await
    }

    /// View counts per device class, most common first. No limit; the rule
    /// table bounds the number of classes.
    pub async fn devices(&self) -> Result<Vec<DeviceStat>, StoreError> {
        let spec = ReportSpec::counted(device_case_expr(), "count DESC", None);
        self.run_report(&spec, |device, count| DeviceStat { device, count })
            .await
    }

    /// Top 10 browser families by view count. The family is the token
    /// before the first `/`; with no `/`, `split_part` returns the whole
    /// string, matching `pagepulse_core::classify::browser_family`.
    pub async fn browsers(&self) -> Result<Vec<BrowserStat>, StoreError> {
        let spec = ReportSpec::counted(
            "split_part(COALESCE(user_agent, ''), '/', 1)",
            "count DESC",
            Some(10),
        );
        self.run_report(&spec, |browser, count| BrowserStat { browser, count })
            .await
    }
}
