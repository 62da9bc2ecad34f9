//! Readiness checks
//!
//! The database is the only required dependency. The song details lookup is
//! reported but never makes the service unhealthy.

use serde::Serialize;
use sqlx::PgPool;
use std::time::{Duration, Instant};

use super::SongDetailsLookup;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Unhealthy,
    /// Optional dependency that is not configured
    Skipped,
}

/// Result of one dependency check
#[derive(Debug, Clone, Serialize)]
pub struct ServiceHealth {
    pub name: &'static str,
    pub status: ServiceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ServiceHealth {
    /// Outcome of a check that took `elapsed`
    pub fn checked(name: &'static str, outcome: Result<(), String>, elapsed: Duration) -> Self {
        let (status, error) = match outcome {
            Ok(()) => (ServiceStatus::Healthy, None),
            Err(error) => (ServiceStatus::Unhealthy, Some(error)),
        };
        Self {
            name,
            status,
            response_time_ms: Some(elapsed.as_millis() as u64),
            error,
            details: None,
        }
    }

    /// Configured dependency that is not checked
    pub fn configured(name: &'static str, details: serde_json::Value) -> Self {
        Self {
            name,
            status: ServiceStatus::Healthy,
            response_time_ms: None,
            error: None,
            details: Some(details),
        }
    }

    pub fn skipped(name: &'static str, reason: &str) -> Self {
        Self {
            name,
            status: ServiceStatus::Skipped,
            response_time_ms: None,
            error: None,
            details: Some(serde_json::json!({ "reason": reason })),
        }
    }
}

/// Body of `GET /health/ready`
#[derive(Debug, Clone, Serialize)]
pub struct HealthCheckResponse {
    /// Unhealthy as soon as one service is unhealthy
    pub status: ServiceStatus,
    pub services: Vec<ServiceHealth>,
    pub total_time_ms: u64,
    pub version: &'static str,
}

impl HealthCheckResponse {
    pub fn new(services: Vec<ServiceHealth>, total_time: Duration) -> Self {
        let status = if services
            .iter()
            .any(|s| s.status == ServiceStatus::Unhealthy)
        {
            ServiceStatus::Unhealthy
        } else {
            ServiceStatus::Healthy
        };

        Self {
            status,
            services,
            total_time_ms: total_time.as_millis() as u64,
            version: env!("CARGO_PKG_VERSION"),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == ServiceStatus::Healthy
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HealthService;

impl HealthService {
    pub fn new() -> Self {
        Self
    }

    /// Run `SELECT 1` on the application pool
    pub async fn check_database(&self, pool: &PgPool) -> ServiceHealth {
        let start = Instant::now();
        let outcome = sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(pool)
            .await
            .map(|_| ())
            .map_err(|e| format!("Query failed: {}", e));
        ServiceHealth::checked("database", outcome, start.elapsed())
    }

    /// The lookup endpoint only answers song queries, so it is not checked
    pub fn check_details(&self, lookup: &SongDetailsLookup) -> ServiceHealth {
        match lookup.client() {
            Some(client) => ServiceHealth::configured(
                "song_details",
                serde_json::json!({ "url": client.base_url() }),
            ),
            None => ServiceHealth::skipped("song_details", "Not configured"),
        }
    }

    pub async fn check_all(
        &self,
        pool: &PgPool,
        lookup: &SongDetailsLookup,
    ) -> HealthCheckResponse {
        let start = Instant::now();
        let services = vec![self.check_database(pool).await, self.check_details(lookup)];
        HealthCheckResponse::new(services, start.elapsed())
    }
}
