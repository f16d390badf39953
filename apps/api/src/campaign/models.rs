//! Campaign request and result types.
//!
//! Field names follow the JSON contract the model is asked to produce
//! (camelCase on the wire).

use serde::{Deserialize, Serialize};

pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 100.0;

/// Input for campaign generation. Only `topic` is meaningful when empty fields are sent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignRequest {
    pub topic: String,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub target_audience: Option<String>,
    #[serde(default)]
    pub tone: Option<String>,
}

/// Hook quality breakdown. Every score is 0–100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookIntelligence {
    pub retention_probability: f64,
    pub emotional_trigger_strength: f64,
    pub curiosity_gap: f64,
    pub impact_score: f64,
    pub pacing_strength: f64,
    pub overall_score: f64,
}

impl HookIntelligence {
    pub fn named_scores(&self) -> [(&'static str, f64); 6] {
        [
            ("retentionProbability", self.retention_probability),
            ("emotionalTriggerStrength", self.emotional_trigger_strength),
            ("curiosityGap", self.curiosity_gap),
            ("impactScore", self.impact_score),
            ("pacingStrength", self.pacing_strength),
            ("overallScore", self.overall_score),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// 1-based position in the storyboard.
    pub scene: u32,
    pub visual: String,
    pub camera: String,
    pub lighting: String,
    /// Free text, e.g. "3s".
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStoryboard {
    pub scenes: Vec<Scene>,
    pub overlay_text: String,
    pub cta_ending: String,
}

/// A generated social media campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub primary_hook: String,
    pub cinematic_reel_script: String,
    pub instagram_caption: String,
    #[serde(rename = "linkedInCaption")]
    pub linkedin_caption: String,
    pub youtube_caption: String,
    pub twitter_caption: String,
    pub hashtags: Vec<String>,
    pub cta: String,
    pub engagement_prediction_score: f64,
    pub content_strategy_advice: String,
    pub hook_intelligence: HookIntelligence,
    pub video_storyboard: VideoStoryboard,
}

/// Result of a successful generation: the typed campaign plus what the model actually said.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignOutput {
    pub campaign: Campaign,
    /// The parsed JSON, including any fields `Campaign` does not model.
    pub raw_data: serde_json::Value,
    /// Unmodified model text, for logging and debugging by the caller.
    pub response_text: String,
}

#[cfg(test)]
pub(crate) const SAMPLE_CAMPAIGN_JSON: &str = r#"{
  "primaryHook": "Stop scrolling: your morning routine is lying to you.",
  "cinematicReelScript": "0-3s: alarm blares. 3-8s: coffee pour in slow motion.",
  "instagramCaption": "Mornings, reimagined. Save this for tomorrow.",
  "linkedInCaption": "What high performers do before 7am.",
  "youtubeCaption": "The 5-minute morning reset | #Shorts",
  "twitterCaption": "Your morning sets the tone. Here's a 5-minute reset.",
  "hashtags": ["morningroutine", "productivity", "selfcare"],
  "cta": "Follow for tomorrow's reset.",
  "engagementPredictionScore": 85,
  "contentStrategyAdvice": "Post at 6:30am local time and pin the first comment.",
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
      {"scene": 1, "visual": "Phone alarm close-up", "camera": "macro push-in", "lighting": "cold dawn blue", "duration": "2s"},
      {"scene": 2, "visual": "Coffee pour", "camera": "low angle slow motion", "lighting": "warm golden", "duration": "3s"}
    ],
    "overlayText": "5 minutes. That's it.",
    "ctaEnding": "Follow button pulse"
  }
}"#;
