//! Health check endpoint for deployment platforms.
//!
//! Provides a liveness probe that returns 200 OK when the process is running.
//! Used by PaaS health checks, container orchestrators, and load balancers.

use axum::Json;
use serde::Serialize;

/// Body of a health check response.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// Health check handler.
///
/// Always answers `{"status":"OK"}`. This is a liveness probe: it only checks
/// that the process can respond to HTTP, not that the home page is deployed.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "OK" })
}
