pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::campaign::handlers::handle_generate_campaign;
use crate::refine::handlers::handle_refine_content;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/campaigns/generate", post(handle_generate_campaign))
        .route("/api/v1/content/refine", post(handle_refine_content))
        .with_state(state)
}
