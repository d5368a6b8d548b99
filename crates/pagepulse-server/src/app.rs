use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{routes, state::AppState};

/// Construct the Axum [`Router`] with all routes and middleware attached.
///
/// Middleware is applied in outer-to-inner order (outermost runs first on
/// request, last on response):
///
/// 1. `TraceLayer`: structured request/response logging via `tracing`.
/// 2. `CorsLayer`: permissive CORS so the tracking pixel/script can be
///    embedded on third-party pages.
///
/// The stats API additionally carries the Basic-auth guard; `/track` and
/// `/health` stay open (rate limiting on `/track` happens in the handler).
pub fn build_app(state: Arc<AppState>) -> Router {
    let stats_api = Router::new()
        .route("/api/stats/daily", get(routes::stats::daily))
        .route("/api/stats/unique-visits", get(routes::stats::unique_visits))
        .route("/api/stats/top-pages", get(routes::stats::top_pages))
        .route("/api/stats/referrers", get(routes::stats::referrers))
        .route("/api/stats/devices", get(routes::stats::devices))
        .route("/api/stats/browsers", get(routes::stats::browsers))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            routes::auth::require_basic_auth,
        ));

    Router::new()
        .route("/health", get(routes::health::health))
        .route("/track", get(routes::track::track))
        .merge(stats_api)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
