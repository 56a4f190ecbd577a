//! Health check endpoints for liveness and readiness probes

use std::time::Instant;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use super::state::AppState;

/// Health response with optional component status
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<HealthCheck>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

/// Health check status
#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Individual component health check
#[derive(Serialize)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn healthy() -> HealthResponse {
    HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
        latency_ms: None,
    }
}

/// Simple health check - returns 200 if the service is running
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(healthy()))
}

/// Liveness probe
pub async fn live_check() -> impl IntoResponse {
    (StatusCode::OK, Json(healthy()))
}

/// Readiness check - verifies the credential store is reachable
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let start = Instant::now();

    let storage_check = match state.user_service.check_storage().await {
        Ok(()) => HealthCheck {
            name: "storage".to_string(),
            status: HealthStatus::Healthy,
            message: None,
        },
        Err(e) => HealthCheck {
            name: "storage".to_string(),
            status: HealthStatus::Unhealthy,
            message: Some(e.to_string()),
        },
    };

    let overall_status = storage_check.status;
    let status_code = match overall_status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    let response = HealthResponse {
        status: overall_status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: Some(vec![storage_check]),
        latency_ms: Some(start.elapsed().as_millis() as u64),
    };

    (status_code, Json(response))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::ServiceExt;

    use super::*;
    use crate::domain::user::MockUserRepository;
    use crate::domain::DomainError;
    use crate::infrastructure::user::{InMemoryUserRepository, Sha256Hasher, UserService};

    fn ready_router(state: AppState) -> Router {
        Router::new()
            .route("/ready", get(ready_check))
            .route("/health", get(health_check))
            .with_state(state)
    }

    async fn get_status(app: Router, uri: &str) -> StatusCode {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        app.oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_health_check() {
        let state = AppState::new(Arc::new(UserService::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(Sha256Hasher::new()),
        )));

        assert_eq!(get_status(ready_router(state), "/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_ready_with_reachable_storage() {
        let state = AppState::new(Arc::new(UserService::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(Sha256Hasher::new()),
        )));

        assert_eq!(get_status(ready_router(state), "/ready").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_ready_with_unreachable_storage() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_ping()
            .returning(|| Err(DomainError::unavailable("connection refused")));

        let state = AppState::new(Arc::new(UserService::new(
            Arc::new(repository),
            Arc::new(Sha256Hasher::new()),
        )));

        assert_eq!(
            get_status(ready_router(state), "/ready").await,
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
