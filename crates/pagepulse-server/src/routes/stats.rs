//! `GET /api/stats/*`: the six aggregation reports as JSON arrays.
//!
//! Each handler is a thin delegation to the store trait; ordering and
//! limits are decided by the report layer, not here.

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};

use crate::{error::AppError, state::AppState};

pub async fn daily(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.store.daily_stats().await?))
}

pub async fn unique_visits(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.store.unique_visits().await?))
}

pub async fn top_pages(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.store.top_pages().await?))
}

pub async fn referrers(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.store.referrers().await?))
}

pub async fn devices(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.store.devices().await?))
}

pub async fn browsers(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.store.browsers().await?))
}
