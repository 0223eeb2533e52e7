//! LLM Client — the single point of entry for all completion API calls.
//!
//! ARCHITECTURAL RULE: No other module may call the Groq API directly.
//! All LLM interactions MUST go through this module.
//!
//! One request per call. There is no retry here; failures go straight back
//! to the caller.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::applicant::ResolvedGeneration;

#[cfg(test)]
pub mod mock;

/// Default OpenAI-compatible chat completions endpoint.
pub const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
/// Model used when the caller does not name one.
pub const DEFAULT_MODEL: &str = "llama3-8b-8192";

const MAX_TOKENS: u32 = 1000;
const TEMPERATURE: f32 = 0.8;
const TOP_P: f32 = 0.95;
const FREQUENCY_PENALTY: f32 = 0.7;
const PRESENCE_PENALTY: f32 = 0.7;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Groq API key not found")]
    MissingCredential,

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
    frequency_penalty: f32,
    presence_penalty: f32,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

/// Token accounting. Informational only, so every field may be missing or null.
#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: Option<u32>,
    pub completion_tokens: Option<u32>,
}

impl ChatResponse {
    /// Trimmed content of the first choice, if there is any non-blank content.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.as_deref())
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// The LLM client shared by all handlers.
/// Wraps the chat completions API and owns the process-wide fallback key.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_url: String,
    default_api_key: Option<String>,
}

impl LlmClient {
    pub fn new(
        api_url: impl Into<String>,
        default_api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_url: api_url.into(),
            default_api_key,
        })
    }

    /// The key consulted when a request carries no credential of its own.
    pub fn default_api_key(&self) -> Option<&str> {
        self.default_api_key.as_deref()
    }

    /// Makes one call to the chat completions API and returns the decoded body.
    pub async fn call(
        &self,
        generation: &ResolvedGeneration,
        prompt: &str,
    ) -> Result<ChatResponse, LlmError> {
        let request_body = ChatRequest {
            model: &generation.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            top_p: TOP_P,
            frequency_penalty: FREQUENCY_PENALTY,
            presence_penalty: PRESENCE_PENALTY,
            stream: false,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&generation.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("LLM API returned {}: {}", status, body);
            // Try to parse error message
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat_response: ChatResponse = response.json().await?;

        if let Some(usage) = &chat_response.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={:?}, completion_tokens={:?}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(chat_response)
    }
}
