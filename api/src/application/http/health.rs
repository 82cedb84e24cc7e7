use axum::{Json, Router, http::StatusCode, routing::get};
use serde_json::json;

use crate::application::http::server::app_state::AppState;

async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{root_path}/health"), get(health))
}
