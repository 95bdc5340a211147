use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of history entries forwarded to the relay.
pub const HISTORY_WINDOW: usize = 6;
/// Entries carried over from the previous window when the relay returns history.
pub const HISTORY_CARRY_OVER: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// One turn of conversation context forwarded to the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub role: Role,
    pub content: String,
}

impl HistoryEntry {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// A transcript line shown in the chat widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Relay request body. `message` stays optional so a missing field is reported
/// with the relay's own error shape instead of an extractor rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub conversation_history: Vec<HistoryEntry>,
}

/// Relay success body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayReply {
    pub response: String,
    #[serde(default)]
    pub conversation_history: Vec<HistoryEntry>,
}

/// Relay failure body: the error plus a reply the widget can still render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayFailure {
    pub error: String,
    pub response: String,
}

/// Returns the most recent `n` entries, dropping the oldest first.
pub fn trailing<T>(entries: &[T], n: usize) -> &[T] {
    &entries[entries.len().saturating_sub(n)..]
}
