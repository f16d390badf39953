// All LLM prompt text for campaign generation.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::campaign::models::CampaignRequest;
use crate::llm_client::prompts::{injection_guard, USER_CONTEXT_CLOSE, USER_CONTEXT_OPEN};

pub const DEFAULT_PLATFORM: &str = "General Social Media";
pub const DEFAULT_AUDIENCE: &str = "General Audience";
pub const DEFAULT_TONE: &str = "Inspirational";

/// Campaign system instruction. Replace `{injection_guard}` before sending.
pub const CAMPAIGN_SYSTEM_TEMPLATE: &str = r#"You are an elite creative director and growth marketing expert.
Generate a comprehensive social media campaign based ONLY on the user context provided inside the <user_context> tags.
{injection_guard}

Your output MUST be a strict, valid JSON object following this EXACT schema:
{
  "primaryHook": "A powerful, scroll-stopping hook (string)",
  "cinematicReelScript": "A structured, fast-paced script for a short-form vertical video reel (string)",
  "instagramCaption": "Engaging caption formatted for Instagram (string, if applicable or general)",
  "linkedInCaption": "Professional yet engaging caption for LinkedIn (string, if applicable or general)",
  "youtubeCaption": "Optimized description and title for YouTube Shorts/Videos (string, if applicable or general)",
  "twitterCaption": "Punchy 280-character tweet or thread (string, if applicable or general)",
  "hashtags": ["list", "of", "relevant", "hashtags"],
  "cta": "A strong, clear call to action (string)",
  "engagementPredictionScore": 85,
  "contentStrategyAdvice": "Advice on how to post, format, or follow up (string)",
  "hookIntelligence": {
    "retentionProbability": 80,
    "emotionalTriggerStrength": 90,
    "curiosityGap": 85,
    "impactScore": 95,
    "pacingStrength": 88,
    "overallScore": 88
  },
  "videoStoryboard": {
    "scenes": [
      {
        "scene": 1,
        "visual": "A brief description of what is happening on screen",
        "camera": "Specific camera movement or angle (e.g., low angle, dynamic zoom)",
        "lighting": "Lighting setup (e.g., moody cinematic, bright neon)",
        "duration": "Suggested duration for the scene (e.g., '3s')"
      }
    ],
    "overlayText": "Text to display on screen",
    "ctaEnding": "Visual call to action at the end"
  }
}

All scores are numbers from 0 to 100. Number scenes from 1 in playback order.
Respond strictly with the raw JSON."#;

pub fn build_system_instruction() -> String {
    CAMPAIGN_SYSTEM_TEMPLATE.replace("{injection_guard}", &injection_guard("user_context"))
}

/// Wraps the caller's fields in `<user_context>` tags, filling generic defaults for blanks.
pub fn build_user_prompt(request: &CampaignRequest) -> String {
    format!(
        "{USER_CONTEXT_OPEN}\n\
         Topic/Idea: \"{topic}\"\n\
         Target Platform: {platform}\n\
         Target Audience: {audience}\n\
         Tone: {tone}\n\
         {USER_CONTEXT_CLOSE}",
        topic = request.topic,
        platform = or_default(request.platform.as_deref(), DEFAULT_PLATFORM),
        audience = or_default(request.target_audience.as_deref(), DEFAULT_AUDIENCE),
        tone = or_default(request.tone.as_deref(), DEFAULT_TONE),
    )
}

fn or_default<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => default,
    }
}
