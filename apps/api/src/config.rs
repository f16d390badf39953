use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const TEST_ENV_MARKER: &str = "test";

/// Application configuration loaded from environment variables.
///
/// A missing Gemini credential is NOT fatal: the server starts and every
/// AI operation fails with a 403 until a key is supplied.
#[derive(Debug, Clone)]
pub struct Config {
    /// `GEMINI_API_KEY`, falling back to `API_KEY`. First non-empty wins.
    pub gemini_api_key: Option<String>,
    pub ai_model: String,
    pub gemini_base_url: String,
    pub request_timeout: Duration,
    pub node_env: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let timeout_secs = std::env::var("AI_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "120".to_string())
            .parse::<u64>()
            .context("AI_REQUEST_TIMEOUT_SECS must be a whole number of seconds")?;

        Ok(Config {
            gemini_api_key: first_non_empty([
                std::env::var("GEMINI_API_KEY").ok(),
                std::env::var("API_KEY").ok(),
            ]),
            ai_model: first_non_empty([std::env::var("NEXT_PUBLIC_AI_MODEL").ok()])
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            gemini_base_url: first_non_empty([std::env::var("GEMINI_API_BASE_URL").ok()])
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            request_timeout: Duration::from_secs(timeout_secs),
            node_env: std::env::var("NODE_ENV").ok(),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// True when `NODE_ENV=test`; used to silence the missing-credential warning.
    pub fn is_test_env(&self) -> bool {
        self.node_env.as_deref() == Some(TEST_ENV_MARKER)
    }

    /// Whether startup should warn that AI features are unavailable.
    pub fn should_warn_missing_key(&self) -> bool {
        self.gemini_api_key.is_none() && !self.is_test_env()
    }
}

/// Returns the first value that is set and not blank.
fn first_non_empty<const N: usize>(candidates: [Option<String>; N]) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .find(|v| !v.trim().is_empty())
}
