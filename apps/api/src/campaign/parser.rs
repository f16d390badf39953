//! Campaign response normalization: empty check, fence strip, JSON parse,
//! typed decode, schema validation.

use crate::campaign::models::{Campaign, CampaignOutput, SCORE_MAX, SCORE_MIN};
use crate::gateway::GatewayError;
use crate::llm_client::strip_code_fences;

/// Turns raw model text into a validated `CampaignOutput`.
pub fn parse_campaign_response(response_text: String) -> Result<CampaignOutput, GatewayError> {
    if response_text.trim().is_empty() {
        return Err(GatewayError::EmptyResponse);
    }

    let raw_data: serde_json::Value = serde_json::from_str(strip_code_fences(&response_text))?;

    let campaign: Campaign = serde_json::from_value(raw_data.clone())
        .map_err(|e| GatewayError::SchemaViolation(e.to_string()))?;
    validate_campaign(&campaign)?;

    Ok(CampaignOutput {
        campaign,
        raw_data,
        response_text,
    })
}

/// Checks the constraints serde cannot express.
///
/// - every score lies in 0–100
/// - the storyboard has at least one scene
/// - scene numbers strictly increase
pub fn validate_campaign(campaign: &Campaign) -> Result<(), GatewayError> {
    check_score("engagementPredictionScore", campaign.engagement_prediction_score)?;
    for (name, score) in campaign.hook_intelligence.named_scores() {
        check_score(name, score)?;
    }

    let scenes = &campaign.video_storyboard.scenes;
    if scenes.is_empty() {
        return Err(GatewayError::SchemaViolation(
            "videoStoryboard.scenes must contain at least one scene".to_string(),
        ));
    }
    if let Some(pair) = scenes.windows(2).find(|w| w[1].scene <= w[0].scene) {
        return Err(GatewayError::SchemaViolation(format!(
            "videoStoryboard.scenes out of order: scene {} follows scene {}",
            pair[1].scene, pair[0].scene
        )));
    }

    Ok(())
}

fn check_score(name: &str, score: f64) -> Result<(), GatewayError> {
    if (SCORE_MIN..=SCORE_MAX).contains(&score) {
        Ok(())
    } else {
        Err(GatewayError::SchemaViolation(format!(
            "{name} must be between {SCORE_MIN} and {SCORE_MAX}, got {score}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campaign::models::SAMPLE_CAMPAIGN_JSON;

    fn sample_value() -> serde_json::Value {
        serde_json::from_str(SAMPLE_CAMPAIGN_JSON).unwrap()
    }

    #[test]
    fn test_parses_fenced_json() {
        let fenced = format!("```json\n{SAMPLE_CAMPAIGN_JSON}\n```");
        let output = parse_campaign_response(fenced.clone()).unwrap();

        assert_eq!(output.raw_data, sample_value());
        assert_eq!(output.response_text, fenced);
        assert_eq!(output.campaign.cta, "Follow for tomorrow's reset.");
    }

    #[test]
    fn test_parses_unfenced_json() {
        let output = parse_campaign_response(SAMPLE_CAMPAIGN_JSON.to_string()).unwrap();
        assert_eq!(output.raw_data, sample_value());
    }

    #[test]
    fn test_empty_response_is_rejected() {
        assert!(matches!(
            parse_campaign_response(String::new()),
            Err(GatewayError::EmptyResponse)
        ));
        assert!(matches!(
            parse_campaign_response("  \n ".to_string()),
            Err(GatewayError::EmptyResponse)
        ));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let err = parse_campaign_response("```json\n{\"primaryHook\": \n```".to_string())
            .unwrap_err();
        assert!(matches!(err, GatewayError::MalformedJson(_)));
    }

    #[test]
    fn test_extra_fields_are_kept_in_raw_data() {
        let mut value = sample_value();
        value["bonusIdea"] = serde_json::json!("duet with a creator");
        let output = parse_campaign_response(value.to_string()).unwrap();
        assert_eq!(output.raw_data["bonusIdea"], "duet with a creator");
    }

    #[test]
    fn test_missing_field_is_schema_violation() {
        let mut value = sample_value();
        value.as_object_mut().unwrap().remove("hookIntelligence");
        let err = parse_campaign_response(value.to_string()).unwrap_err();
        assert!(matches!(err, GatewayError::SchemaViolation(_)));
    }

    #[test]
    fn test_out_of_range_score_is_schema_violation() {
        let mut value = sample_value();
        value["hookIntelligence"]["curiosityGap"] = serde_json::json!(120);
        let err = parse_campaign_response(value.to_string()).unwrap_err();
        match err {
            GatewayError::SchemaViolation(msg) => assert!(msg.contains("curiosityGap")),
            other => panic!("expected SchemaViolation, got {other:?}"),
        }

        let mut value = sample_value();
        value["engagementPredictionScore"] = serde_json::json!(-1);
        assert!(matches!(
            parse_campaign_response(value.to_string()),
            Err(GatewayError::SchemaViolation(_))
        ));
    }

    #[test]
    fn test_boundary_scores_are_accepted() {
        let mut value = sample_value();
        value["engagementPredictionScore"] = serde_json::json!(0);
        value["hookIntelligence"]["overallScore"] = serde_json::json!(100);
        assert!(parse_campaign_response(value.to_string()).is_ok());
    }

    #[test]
    fn test_scene_order_is_enforced() {
        let mut value = sample_value();
        value["videoStoryboard"]["scenes"][1]["scene"] = serde_json::json!(1);
        let err = parse_campaign_response(value.to_string()).unwrap_err();
        assert!(matches!(err, GatewayError::SchemaViolation(_)));
    }

    #[test]
    fn test_empty_storyboard_is_rejected() {
        let mut value = sample_value();
        value["videoStoryboard"]["scenes"] = serde_json::json!([]);
        assert!(matches!(
            parse_campaign_response(value.to_string()),
            Err(GatewayError::SchemaViolation(_))
        ));
    }
}
