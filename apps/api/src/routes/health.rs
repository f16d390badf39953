use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, version, model and whether a credential is configured.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "campaign-api",
        "model": state.gateway.model(),
        "ai_configured": state.gateway.has_credentials(),
        "environment": state.config.node_env.as_deref().unwrap_or("development")
    }))
}
