use serde::{Deserialize, Serialize};

/// Request to rewrite existing content.
#[derive(Debug, Clone, Deserialize)]
pub struct RefineRequest {
    /// Content category, e.g. "caption" or "hashtags". Free text.
    #[serde(rename = "type", default)]
    pub content_type: String,
    #[serde(default)]
    pub topic: Option<String>,
    /// The original text to refine.
    #[serde(default)]
    pub content: Option<String>,
    /// What change to make.
    pub instruction: String,
}

/// Refined output. Serialized untagged: callers see a JSON array or a string.
///
/// Array elements are passed through as the model produced them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RefinedContent {
    Items(Vec<serde_json::Value>),
    Text(String),
}
