use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use pagepulse_server::{app::build_app, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Structured JSON logging. Level controlled via RUST_LOG env var.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pagepulse=info".parse()?),
        )
        .json()
        .init();

    let cfg = pagepulse_core::config::Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    if !cfg.auth_enabled() {
        tracing::warn!(
            "DASHBOARD_USER / DASHBOARD_PASS not set; the stats API is open. \
             Set both to enable Basic auth."
        );
    }

    // Ensure the data directory exists before opening DuckDB.
    std::fs::create_dir_all(&cfg.data_dir)?;
    let db_path = format!("{}/pagepulse.db", cfg.data_dir);

    // Open the store: initialises the schema idempotently and starts the
    // retention sweeper with the configured horizon.
    let db = pagepulse_duckdb::DuckDbStore::open(&db_path, cfg.retention_days)?;

    let state = Arc::new(AppState::new(db, cfg.clone()));
    let app = build_app(Arc::clone(&state));

    let addr = format!("0.0.0.0:{}", cfg.port);
    info!(
        port = cfg.port,
        retention_days = cfg.retention_days,
        "PagePulse listening on {}",
        addr
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    // ConnectInfo gives handlers the socket peer for direct visitors.
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
        })
        .await?;

    // Stop the sweeper and checkpoint the database on the way out.
    if let Err(e) = state.db.close().await {
        tracing::error!(error = %e, "Store close failed during shutdown");
    }

    Ok(())
}
