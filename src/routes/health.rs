//! Health check endpoint for container orchestration.
//!
//! Provides a simple liveness probe that returns 200 OK when the process is
//! running. Used by Kubernetes, ECS, systemd, and load balancers to verify
//! the service is alive.

use axum::Json;
use serde::Serialize;

use crate::config::SERVICE_NAME;

/// Health check response payload. Field order is fixed so the serialized
/// body is byte-identical across requests.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub ok: bool,
    pub service: &'static str,
}

/// Health check handler.
///
/// Returns a fixed JSON payload identifying the service. This is a liveness
/// probe - it only checks that the process can respond to HTTP.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        ok: true,
        service: SERVICE_NAME,
    })
}
