//! Liveness endpoint

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Configured `host:port`
    pub server: String,
    /// Books currently on the shelf
    pub books: usize,
}

/// Report that the server is up, with its configured address and shelf size
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Server is up", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let server = &state.config.server;

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        server: format!("{}:{}", server.host, server.port),
        books: state.services.books.count(),
    })
}
