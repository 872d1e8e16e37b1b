//! Health check endpoints

use axum::{http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    service: String,
    version: String,
}

async fn health(state: AppState) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: state.config.app.name.to_string(),
        version: state.config.app.version.to_string(),
    })
}

async fn ready(state: AppState) -> Result<Json<HealthResponse>, StatusCode> {
    if !database::mongodb::check_health(&state.mongo_client).await {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }

    Ok(Json(HealthResponse {
        status: "ready".to_string(),
        service: state.config.app.name.to_string(),
        version: state.config.app.version.to_string(),
    }))
}

pub fn router(state: AppState) -> Router {
    let health_state = state.clone();
    Router::new()
        .route("/health", get(move || health(health_state)))
        .route("/ready", get(move || ready(state)))
}
