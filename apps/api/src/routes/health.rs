use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /
/// Service banner.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Creative Language Translator API",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /health
/// Liveness plus the AI mode chosen at startup.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "ai_enabled": state.ai.is_enabled(),
        "model": state.ai.model()
    }))
}
