//! Health check endpoint for container orchestration.
//!
//! Provides a liveness/readiness probe that returns 200 OK when the process is running.
//! Used by Azure Container Apps, Kubernetes and load balancers to verify the service is alive.

use axum::Json;
use serde::Serialize;

use crate::config::HEALTH_STATUS;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check handler.
///
/// This only checks that the process can respond to HTTP; there are no
/// downstream dependencies to probe.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HEALTH_STATUS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_payload() {
        let Json(body) = health().await;
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"status":"ok"}"#);
    }
}
