//! Health check HTTP route handlers
//!
//! Provides endpoints for checking the health of the API and its dependencies:
//! - `GET /health` - Simple liveness check (returns 200 OK)
//! - `GET /health/ready` - Readiness check (verifies all dependencies)
//! - `GET /health/live` - Kubernetes-style liveness check

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use sqlx::PgPool;
use std::sync::Arc;

use crate::services::{HealthService, SongDetailsLookup};

/// Shared application state for health check handlers
#[derive(Clone)]
pub struct HealthState {
    /// Application database pool
    pub pool: PgPool,
    /// Song details lookup, reported but not required
    pub details: Arc<SongDetailsLookup>,
    /// Health check service
    pub health_service: HealthService,
}

impl HealthState {
    /// Create new health state over the application pool
    pub fn new(pool: PgPool, details: Arc<SongDetailsLookup>) -> Self {
        Self {
            pool,
            details,
            health_service: HealthService::new(),
        }
    }
}

/// Create health check router
pub fn health_router(state: HealthState) -> Router {
    Router::new()
        .route("/", get(simple_health))
        .route("/live", get(liveness))
        .route("/ready", get(readiness))
        .with_state(state)
}

/// Simple health check - always returns OK if the server is running
///
/// This is useful for load balancer health checks that just need to verify
/// the server is responding to HTTP requests.
///
/// # Response
/// - 200 OK with body "OK"
async fn simple_health() -> &'static str {
    "OK"
}

/// Liveness check for Kubernetes
///
/// Returns 200 if the server process is running and can handle requests.
/// This should NOT check external dependencies - that's what readiness is for.
///
/// # Response
/// - 200 OK with JSON body containing status
async fn liveness() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Readiness check - checks the database and reports the details lookup
///
/// # Response
/// - 200 OK if the database answers
/// - 503 Service Unavailable otherwise
async fn readiness(State(state): State<HealthState>) -> impl IntoResponse {
    let response = state
        .health_service
        .check_all(&state.pool, &state.details)
        .await;

    let status_code = if response.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}
