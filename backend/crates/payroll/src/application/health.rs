//! Health Check Use Case

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::repository::HealthCheck;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseStatus {
    Connected,
    Disconnected,
}

/// Outcome of one health check
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub timestamp: DateTime<Utc>,
    pub database: DatabaseStatus,
    pub environment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.status == HealthStatus::Healthy
    }
}

pub struct HealthUseCase<H>
where
    H: HealthCheck,
{
    backend: Arc<H>,
}

impl<H> HealthUseCase<H>
where
    H: HealthCheck,
{
    pub fn new(backend: Arc<H>) -> Self {
        Self { backend }
    }

    /// Never fails; a backend failure is reported, not returned
    pub async fn check(&self, environment: &str) -> HealthReport {
        let (status, database, error) = match self.backend.ping().await {
            Ok(()) => (HealthStatus::Healthy, DatabaseStatus::Connected, None),
            Err(e) => {
                tracing::error!(error = %e, "Health check failed");
                (
                    HealthStatus::Unhealthy,
                    DatabaseStatus::Disconnected,
                    Some(e.to_string()),
                )
            }
        };

        HealthReport {
            status,
            timestamp: Utc::now(),
            database,
            environment: environment.to_string(),
            error,
        }
    }
}
