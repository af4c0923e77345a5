//! Service info and health routes

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

/// Public routes: service identification and health
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}

#[derive(Serialize)]
pub struct ApiInfo {
    message: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    database: &'static str,
}

/// GET / - service identification
pub async fn root() -> Json<ApiInfo> {
    Json(ApiInfo {
        message: "Employee Management API",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /health - health check with a live store ping
pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let database = match state.db.health().await {
        Ok(_) => "ok",
        Err(e) => {
            tracing::warn!("Database health check failed: {e}");
            "error"
        }
    };

    Json(HealthResponse {
        status: if database == "ok" {
            "healthy"
        } else {
            "degraded"
        },
        version: env!("CARGO_PKG_VERSION"),
        database,
    })
}
