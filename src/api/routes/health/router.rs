//! Router for the health check

use std::sync::Arc;

use axum::{Json, Router};

use super::public::HealthResponse;
use crate::api::state::AppState;

type SharedState = Arc<AppState>;

/// Liveness only, the calendar is not contacted
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

/// Create the health router
pub fn router() -> Router<SharedState> {
    Router::new().route("/health", axum::routing::get(health))
}
