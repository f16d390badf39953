//! AI Gateway — owns the credential and model name, runs the two AI
//! operations end to end: prompt assembly, one remote call, normalization.
//!
//! Settings are injected at construction. The gateway holds no mutable
//! state, so clones can serve concurrent requests independently.

use std::sync::Arc;

use thiserror::Error;

use crate::campaign::models::{CampaignOutput, CampaignRequest};
use crate::campaign::{parser::parse_campaign_response, prompts as campaign_prompts};
use crate::config::Config;
use crate::llm_client::{GenerationRequest, LlmError, TextModel};
use crate::refine::models::{RefineRequest, RefinedContent};
use crate::refine::{prompts as refine_prompts, refiner::normalize_refined_response};

/// Low temperature keeps output close to the schema and shortens sampling.
pub const TEMPERATURE: f32 = 0.4;
const JSON_MIME_TYPE: &str = "application/json";

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("API key is missing")]
    MissingApiKey,

    #[error("Empty response from AI")]
    EmptyResponse,

    #[error("AI returned malformed JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("AI response does not match the campaign schema: {0}")]
    SchemaViolation(String),

    #[error(transparent)]
    Llm(#[from] LlmError),
}

impl GatewayError {
    /// HTTP-equivalent status carried by the error.
    pub fn status(&self) -> u16 {
        match self {
            GatewayError::MissingApiKey => 403,
            _ => 502,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GatewaySettings {
    pub api_key: Option<String>,
    pub model: String,
}

impl From<&Config> for GatewaySettings {
    fn from(config: &Config) -> Self {
        Self {
            api_key: config.gemini_api_key.clone(),
            model: config.ai_model.clone(),
        }
    }
}

#[derive(Clone)]
pub struct AiGateway {
    settings: GatewaySettings,
    backend: Arc<dyn TextModel>,
}

impl AiGateway {
    pub fn new(settings: GatewaySettings, backend: Arc<dyn TextModel>) -> Self {
        Self { settings, backend }
    }

    pub fn model(&self) -> &str {
        &self.settings.model
    }

    pub fn has_credentials(&self) -> bool {
        self.settings.api_key.is_some()
    }

    /// Generates a full campaign and validates it against the campaign schema.
    pub async fn generate_campaign(
        &self,
        request: &CampaignRequest,
    ) -> Result<CampaignOutput, GatewayError> {
        let api_key = self.api_key()?;
        let system = campaign_prompts::build_system_instruction();
        let prompt = campaign_prompts::build_user_prompt(request);

        let text = self
            .backend
            .generate(
                api_key,
                &GenerationRequest {
                    model: &self.settings.model,
                    system_instruction: &system,
                    prompt: &prompt,
                    temperature: TEMPERATURE,
                    response_mime_type: Some(JSON_MIME_TYPE),
                },
            )
            .await?;

        parse_campaign_response(text)
    }

    /// Rewrites existing content. Yields the parsed items when the model answers
    /// with a JSON array, otherwise the trimmed text.
    pub async fn refine_content(
        &self,
        request: &RefineRequest,
    ) -> Result<RefinedContent, GatewayError> {
        let api_key = self.api_key()?;
        let system = refine_prompts::build_system_instruction(&request.content_type);
        let prompt = refine_prompts::build_user_prompt(request);

        let text = self
            .backend
            .generate(
                api_key,
                &GenerationRequest {
                    model: &self.settings.model,
                    system_instruction: &system,
                    prompt: &prompt,
                    temperature: TEMPERATURE,
                    response_mime_type: None,
                },
            )
            .await?;

        Ok(normalize_refined_response(&text))
    }

    fn api_key(&self) -> Result<&str, GatewayError> {
        self.settings
            .api_key
            .as_deref()
            .ok_or(GatewayError::MissingApiKey)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    /// What a `FakeModel` saw on its last call.
    #[derive(Debug, Clone)]
    pub struct RecordedCall {
        pub api_key: String,
        pub model: String,
        pub system_instruction: String,
        pub prompt: String,
        pub temperature: f32,
        pub response_mime_type: Option<String>,
    }

    /// Canned-reply backend that counts and records calls.
    pub struct FakeModel {
        reply: Result<String, u16>,
        pub calls: AtomicUsize,
        pub last_call: Mutex<Option<RecordedCall>>,
    }

    impl FakeModel {
        pub fn replying(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
                last_call: Mutex::new(None),
            })
        }

        pub fn failing(status: u16) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(status),
                calls: AtomicUsize::new(0),
                last_call: Mutex::new(None),
            })
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub fn last_call(&self) -> RecordedCall {
            self.last_call.lock().unwrap().clone().expect("no call recorded")
        }
    }

    #[async_trait]
    impl TextModel for FakeModel {
        async fn generate(
            &self,
            api_key: &str,
            request: &GenerationRequest<'_>,
        ) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_call.lock().unwrap() = Some(RecordedCall {
                api_key: api_key.to_string(),
                model: request.model.to_string(),
                system_instruction: request.system_instruction.to_string(),
                prompt: request.prompt.to_string(),
                temperature: request.temperature,
                response_mime_type: request.response_mime_type.map(str::to_string),
            });
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(status) => Err(LlmError::Api {
                    status: *status,
                    message: "upstream failure".to_string(),
                }),
            }
        }
    }

    pub fn gateway_with(key: Option<&str>, backend: Arc<FakeModel>) -> AiGateway {
        AiGateway::new(
            GatewaySettings {
                api_key: key.map(str::to_string),
                model: "gemini-2.5-flash".to_string(),
            },
            backend,
        )
    }
}
