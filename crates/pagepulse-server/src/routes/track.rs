use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{ConnectInfo, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::{error::AppError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct TrackQuery {
    pub path: Option<String>,
    pub referrer: Option<String>,
}

/// `GET /track?path=/some/page&referrer=...`: record one page view.
///
/// Rate-limited by the global per-minute budget. The user agent comes from
/// the request header; the client address is the first `X-Forwarded-For`
/// hop when present, otherwise the socket peer. Only the anonymized form of
/// the address ever reaches the store, and the raw value is never logged.
/// Responds `200 OK` with an empty body; a missing or empty `path` is a 400
/// from the core validation.
#[tracing::instrument(skip(state, peer, headers, query))]
pub async fn track(
    State(state): State<Arc<AppState>>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Query(query): Query<TrackQuery>,
) -> Result<impl IntoResponse, AppError> {
    if !state.check_rate_limit().await {
        return Err(AppError::RateLimited);
    }

    let user_agent = headers
        .get(axum::http::header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    let raw_addr = client_addr(&headers, &peer);

    state
        .store
        .track(
            query.path.as_deref().unwrap_or(""),
            query.referrer.as_deref().unwrap_or(""),
            user_agent,
            &raw_addr,
        )
        .await?;

    Ok(StatusCode::OK)
}

/// First hop of `X-Forwarded-For`, falling back to the socket peer when the
/// header is absent (direct, un-proxied visitors).
fn client_addr(headers: &HeaderMap, peer: &SocketAddr) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .unwrap_or_else(|| peer.ip().to_string())
}
