//! HTTP route handlers.
//!
//! Two routes exist: `/health` for liveness probes and `/home` for the static
//! page. Everything else falls through to a 404.
//!
//! Every response carries an `x-request-id` header matching the `request_id`
//! field on that request's log lines.

pub mod health;
pub mod home;

use axum::{http::Uri, middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::{CACHE_CONTROL_HEALTH, CACHE_CONTROL_HOME};
use crate::error::AppError;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Fallback for paths with no registered route.
async fn not_found(uri: Uri) -> AppError {
    AppError::RouteNotFound(uri.path().to_string())
}

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    // Health check - never cached, always fresh for liveness probes
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        ));

    // Home page - revalidate every time, the file may be replaced on disk
    let home_routes = Router::new().route("/home", get(home::home)).layer(
        SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HOME),
        ),
    );

    Router::new()
        .merge(health_routes)
        .merge(home_routes)
        .fallback(not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
