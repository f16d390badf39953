//! Axum route handler for campaign generation.

use axum::{extract::State, Json};
use tracing::info;

use crate::campaign::models::{CampaignOutput, CampaignRequest};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/v1/campaigns/generate
///
/// Returns the validated campaign, the parsed JSON and the raw model text.
pub async fn handle_generate_campaign(
    State(state): State<AppState>,
    Json(request): Json<CampaignRequest>,
) -> Result<Json<CampaignOutput>, AppError> {
    if request.topic.trim().is_empty() {
        return Err(AppError::Validation("topic cannot be empty".to_string()));
    }

    let output = state.gateway.generate_campaign(&request).await?;
    info!(
        "Campaign generated: {} scenes, {} hashtags",
        output.campaign.video_storyboard.scenes.len(),
        output.campaign.hashtags.len()
    );

    Ok(Json(output))
}
