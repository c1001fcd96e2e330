//! Health and service-info handlers

use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Service banner response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
}

/// Service banner - confirms the API is reachable
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses((status = 200, description = "Service banner", body = ServiceInfo))
)]
pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "ChronoSort date sorting API up and running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Liveness check - is the server running?
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Server is alive", body = HealthResponse))
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_response_serialization() {
        let resp = HealthResponse {
            status: "ok".to_string(),
            version: "0.1.0".to_string(),
        };
        let json = serde_json::to_string(&resp).expect("serializable");
        assert!(json.contains("\"status\":\"ok\""));
        assert!(json.contains("version"));
    }

    #[test]
    fn service_info_mentions_the_service() {
        let resp = tokio_test::block_on(service_info());
        assert!(resp.0.message.contains("up and running"));
        assert_eq!(resp.0.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn health_check_reports_ok() {
        let resp = tokio_test::block_on(health_check());
        assert_eq!(resp.0.status, "ok");
    }
}
