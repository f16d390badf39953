//! Axum route handler for content refinement.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::refine::models::{RefineRequest, RefinedContent};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RefineResponse {
    pub result: RefinedContent,
}

/// POST /api/v1/content/refine
pub async fn handle_refine_content(
    State(state): State<AppState>,
    Json(request): Json<RefineRequest>,
) -> Result<Json<RefineResponse>, AppError> {
    if request.instruction.trim().is_empty() {
        return Err(AppError::Validation(
            "instruction cannot be empty".to_string(),
        ));
    }

    let result = state.gateway.refine_content(&request).await?;

    Ok(Json(RefineResponse { result }))
}
