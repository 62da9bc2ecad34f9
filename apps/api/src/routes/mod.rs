//! HTTP route handlers for the Songbook API
//!
//! - Song CRUD endpoints under `/api/v1/songs`
//! - Health check and status endpoints under `/health`

pub mod health;
pub mod songs;

use axum::Router;

pub use health::{health_router, HealthState};
pub use songs::{songs_router, SongsState};

/// Versioned API routes
pub fn api_router(state: SongsState) -> Router {
    Router::new().nest("/api/v1/songs", songs_router(state))
}
