//! The mentor relay. Accepts `{message, conversationHistory}`, prepends the career
//! system prompt, forwards the trailing window to the completion provider once and
//! returns the reply together with the history the client should send next time.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, info};

use crate::llm_client::prompts::{CAREER_SYSTEM_PROMPT, RELAY_FAILURE_REPLY};
use crate::llm_client::{CompletionMessage, LlmClient, LlmError};
use crate::models::chat::{
    trailing, HistoryEntry, RelayFailure, RelayReply, RelayRequest, HISTORY_CARRY_OVER,
    HISTORY_WINDOW,
};

#[derive(Debug, Error)]
pub enum MentorError {
    #[error("Message is required")]
    MissingMessage,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error(transparent)]
    Llm(#[from] LlmError),
}

impl IntoResponse for MentorError {
    fn into_response(self) -> Response {
        let status = match &self {
            MentorError::MissingMessage | MentorError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            MentorError::Llm(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        error!("Error in ai-mentor relay: {self}");

        let body = Json(RelayFailure {
            error: self.to_string(),
            response: RELAY_FAILURE_REPLY.to_string(),
        });

        (status, body).into_response()
    }
}

/// Builds the provider message list: system preamble, trailing window, new user turn.
pub fn build_messages<'a>(
    history: &'a [HistoryEntry],
    message: &'a str,
) -> Vec<CompletionMessage<'a>> {
    let window = trailing(history, HISTORY_WINDOW);
    let mut messages = Vec::with_capacity(window.len() + 2);
    messages.push(CompletionMessage {
        role: "system",
        content: CAREER_SYSTEM_PROMPT,
    });
    messages.extend(window.iter().map(|entry| CompletionMessage {
        role: entry.role.as_str(),
        content: &entry.content,
    }));
    messages.push(CompletionMessage {
        role: "user",
        content: message,
    });
    messages
}

/// History returned to the client: previous trailing 4 entries plus the new pair.
pub fn next_history(history: &[HistoryEntry], message: &str, reply: &str) -> Vec<HistoryEntry> {
    let mut next = trailing(history, HISTORY_CARRY_OVER).to_vec();
    next.push(HistoryEntry::user(message));
    next.push(HistoryEntry::assistant(reply));
    next
}

pub async fn relay(llm: &LlmClient, request: RelayRequest) -> Result<RelayReply, MentorError> {
    let message = request
        .message
        .as_deref()
        .filter(|m| !m.is_empty())
        .ok_or(MentorError::MissingMessage)?;

    if !llm.is_configured() {
        return Err(MentorError::Llm(LlmError::MissingApiKey));
    }

    let messages = build_messages(&request.conversation_history, message);
    info!(
        "Sending request to completion provider with {} messages",
        messages.len()
    );

    let response = llm.complete(&messages).await?;
    info!("AI Mentor response generated successfully");

    let conversation_history = next_history(&request.conversation_history, message, &response);

    Ok(RelayReply {
        response,
        conversation_history,
    })
}
