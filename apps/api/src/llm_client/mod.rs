/// LLM Client — the single point of entry for all Gemini API calls.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// Everything goes through the `TextModel` trait so the gateway can be
/// exercised against fakes in tests.
///
/// One request per call. No retries, no caching, no streaming.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

const GENERATE_CONTENT_PATH: &str = "v1beta/models";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Response decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Everything one generation call needs besides the credential.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationRequest<'a> {
    pub model: &'a str,
    pub system_instruction: &'a str,
    pub prompt: &'a str,
    pub temperature: f32,
    /// `Some("application/json")` asks Gemini for JSON mode.
    pub response_mime_type: Option<&'a str>,
}

/// A text-generation backend. `GeminiClient` in production, fakes in tests.
///
/// Returns the model's text, or an empty string when it produced none.
#[async_trait]
pub trait TextModel: Send + Sync {
    async fn generate(
        &self,
        api_key: &str,
        request: &GenerationRequest<'_>,
    ) -> Result<String, LlmError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Gemini wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
    system_instruction: GeminiContent<'a>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'a str>,
}

impl<'a> From<&GenerationRequest<'a>> for GeminiRequest<'a> {
    fn from(request: &GenerationRequest<'a>) -> Self {
        Self {
            contents: vec![GeminiContent {
                role: Some("user"),
                parts: vec![GeminiPart {
                    text: request.prompt,
                }],
            }],
            system_instruction: GeminiContent {
                role: None,
                parts: vec![GeminiPart {
                    text: request.system_instruction,
                }],
            },
            generation_config: GenerationConfig {
                temperature: request.temperature,
                response_mime_type: request.response_mime_type,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl GeminiResponse {
    /// Concatenates the text parts of the first candidate.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

/// Thin wrapper over the Gemini `generateContent` REST endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
}

impl GeminiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/{GENERATE_CONTENT_PATH}/{model}:generateContent",
            self.base_url
        )
    }
}

#[async_trait]
impl TextModel for GeminiClient {
    async fn generate(
        &self,
        api_key: &str,
        request: &GenerationRequest<'_>,
    ) -> Result<String, LlmError> {
        let body = GeminiRequest::from(request);

        let response = self
            .client
            .post(self.endpoint(request.model))
            .header("x-goog-api-key", api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let raw = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<GeminiError>(&raw)
                .map(|e| e.error.message)
                .unwrap_or(raw);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GeminiResponse = serde_json::from_str(&raw)?;

        if let Some(usage) = &parsed.usage_metadata {
            debug!(
                "Gemini call succeeded: model={}, prompt_tokens={}, output_tokens={}",
                request.model, usage.prompt_token_count, usage.candidates_token_count
            );
        }

        Ok(parsed.text())
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
///
/// Leading and trailing markers are removed independently, so a reply with
/// only an opening fence is still cleaned. Idempotent.
pub fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    let text = match text.strip_prefix("```json") {
        Some(rest) => rest.trim_start(),
        None => text
            .strip_prefix("```")
            .map(str::trim_start)
            .unwrap_or(text),
    };
    let text = text
        .strip_suffix("```")
        .map(str::trim_end)
        .unwrap_or(text);
    text.trim()
}
