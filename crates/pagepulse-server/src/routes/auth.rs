use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::{error::AppError, state::AppState};

/// Basic-auth guard for the stats API.
///
/// Enforced only when both `DASHBOARD_USER` and `DASHBOARD_PASS` are
/// configured; otherwise the API is open (a warning is logged at startup).
/// Credentials are compared against the configured values; any malformed
/// header is treated the same as missing credentials.
pub async fn require_basic_auth(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (Some(expected_user), Some(expected_pass)) = (
        state.config.dashboard_user.as_deref(),
        state.config.dashboard_pass.as_deref(),
    ) else {
        return Ok(next.run(request).await);
    };

    let supplied = request
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Basic "))
        .and_then(|v| STANDARD.decode(v).ok())
        .and_then(|bytes| String::from_utf8(bytes).ok());

    match supplied
        .as_deref()
        .and_then(|creds| creds.split_once(':'))
    {
        Some((user, pass)) if user == expected_user && pass == expected_pass => {
            Ok(next.run(request).await)
        }
        _ => Err(AppError::Unauthorized),
    }
}
