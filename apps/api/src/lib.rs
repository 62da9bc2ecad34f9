//! Songbook API library
//!
//! This module exposes the core API components for use in integration tests
//! and as a library.

pub mod config;
pub mod error;
pub mod lyrics;
pub mod models;
pub mod pagination;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod telemetry;

// Re-export commonly used types
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use pagination::Pagination;
