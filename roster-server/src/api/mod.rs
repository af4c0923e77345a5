//! API route modules
//!
//! # Structure
//!
//! - [`health`] - service info and health check
//! - [`employees`] - employee CRUD

pub mod employees;
pub mod health;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// Build the application with shared middleware layers
///
/// Used by both the HTTP server and the integration tests.
pub fn build_app(state: ServerState) -> Router {
    build_router()
        // CORS wide open: the API carries no authentication
        .layer(CorsLayer::permissive())
        // Request tracing at INFO level
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(employees::router())
}
