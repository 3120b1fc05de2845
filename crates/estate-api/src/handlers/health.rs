//! Health check handlers
//!
//! Endpoints for liveness and readiness probes.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::state::AppState;

/// Liveness body
#[derive(Debug, Serialize)]
pub struct HealthBody {
    pub status: &'static str,
}

/// Readiness body with dependency health
#[derive(Debug, Serialize)]
pub struct ReadinessBody {
    pub status: &'static str,
    pub database: bool,
}

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

/// Readiness check with dependency health
///
/// GET /health/ready
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<ReadinessBody>) {
    let db_healthy = state.db_pool().acquire().await.is_ok();

    let (status, body) = if db_healthy {
        (
            StatusCode::OK,
            ReadinessBody {
                status: "ready",
                database: true,
            },
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            ReadinessBody {
                status: "not ready",
                database: false,
            },
        )
    };

    (status, Json(body))
}
