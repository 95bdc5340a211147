//! LLM client: the single point of entry for chat-completion calls in CareerLens.
//!
//! ARCHITECTURAL RULE: No other module may call the completion provider directly.
//! All LLM interactions MUST go through this module.
//!
//! The relay calls the provider exactly once per request. Retrying is the
//! chat client's job (see `chat::session`), never the server's.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

const MAX_COMPLETION_TOKENS: u32 = 500;
const TEMPERATURE: f32 = 0.7;
const REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("OpenAI API key not configured")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("OpenAI API error: {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// One message in an OpenAI-style chat-completion request.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [CompletionMessage<'a>],
    max_completion_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    error: ProviderErrorBody,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: Option<String>,
}

/// The single LLM client used by the mentor relay.
/// Wraps an OpenAI-compatible chat-completions endpoint.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: Option<String>,
    api_url: String,
    model: String,
}

impl LlmClient {
    pub fn new(api_key: Option<String>, api_url: String, model: String) -> anyhow::Result<Self> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()?,
            api_key,
            api_url,
            model,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Sends one chat-completion request and returns the assistant text.
    pub async fn complete(&self, messages: &[CompletionMessage<'_>]) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        let request_body = CompletionRequest {
            model: &self.model,
            messages,
            max_completion_tokens: MAX_COMPLETION_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Completion API returned {}: {}", status, body);
            let message = serde_json::from_str::<ProviderError>(&body)
                .ok()
                .and_then(|e| e.error.message)
                .unwrap_or_else(|| "Unknown error".to_string());
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: CompletionResponse = response.json().await?;

        if let Some(usage) = &completion.usage {
            debug!(
                "Completion succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or(LlmError::EmptyContent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_complete_without_key_fails_fast() {
        let client = LlmClient::new(
            None,
            "http://127.0.0.1:9/unused".to_string(),
            "test-model".to_string(),
        )
        .unwrap();
        let messages = [CompletionMessage {
            role: "user",
            content: "hi",
        }];
        let err = client.complete(&messages).await.unwrap_err();
        assert!(matches!(err, LlmError::MissingApiKey));
        assert_eq!(err.to_string(), "OpenAI API key not configured");
    }

    #[tokio::test]
    async fn test_blank_completion_is_an_error() {
        use crate::test_support::{spawn_mock_provider, ProviderReply};

        let provider = spawn_mock_provider(vec![ProviderReply::text("  \n ")]).await;
        let client = LlmClient::new(
            Some("sk-test".to_string()),
            provider.url.clone(),
            "test-model".to_string(),
        )
        .unwrap();
        let messages = [CompletionMessage {
            role: "user",
            content: "hi",
        }];
        let err = client.complete(&messages).await.unwrap_err();
        assert!(matches!(err, LlmError::EmptyContent));
        assert_eq!(provider.seen_bodies().await.len(), 1);
    }

    #[test]
    fn test_request_serializes_openai_shape() {
        let messages = [CompletionMessage {
            role: "system",
            content: "be nice",
        }];
        let body = CompletionRequest {
            model: "m",
            messages: &messages,
            max_completion_tokens: MAX_COMPLETION_TOKENS,
            temperature: TEMPERATURE,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["model"], "m");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["max_completion_tokens"], 500);
    }

    #[test]
    fn test_provider_error_message_parses() {
        let body = r#"{"error": {"message": "Rate limit reached", "type": "requests"}}"#;
        let parsed: ProviderError = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.error.message.as_deref(), Some("Rate limit reached"));
    }
}
