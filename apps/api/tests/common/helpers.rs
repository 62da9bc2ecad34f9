//! Request and response helpers for router tests

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, Response},
    Router,
};
use songbook_api::routes::{api_router, SongsState};
use songbook_api::services::{SongDetailsLookup, SongService};
use tower::ServiceExt;

use super::mocks::MemorySongStore;

/// Songs router over `store` with the details lookup disabled
pub fn songs_app(store: Arc<MemorySongStore>) -> Router {
    songs_app_with_details(store, SongDetailsLookup::disabled())
}

/// Songs router over `store` with the given details lookup
pub fn songs_app_with_details(store: Arc<MemorySongStore>, details: SongDetailsLookup) -> Router {
    let service = SongService::from_arc(store);
    api_router(SongsState::new(service, details))
}

/// Send a request without a body
pub async fn send(app: Router, method: Method, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a request with a JSON (or deliberately broken) body
pub async fn send_json(app: Router, method: Method, uri: &str, body: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Read a response body as JSON
pub async fn read_json(response: Response<Body>) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
