//! Retry-with-backoff message send.
//!
//! State machine per send:
//! `Idle -> Sending(1) -> {Idle | WaitingBackoff(1) -> Sending(2) -> ... } -> Idle | Failed`.
//! `Failed` holds until the user retries the last message or sends a new one.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::chat::backoff::RetryPolicy;
use crate::chat::fallback::{choose_fallback, FallbackPicker, RandomPicker};
use crate::chat::transport::RelayTransport;
use crate::chat::{GREETING, SUGGESTED_QUESTIONS};
use crate::models::chat::{
    trailing, ChatMessage, HistoryEntry, RelayReply, RelayRequest, Role, HISTORY_WINDOW,
};
use crate::models::notice::Notice;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChatError {
    #[error("Message is empty")]
    EmptyMessage,

    #[error("A message is already being sent")]
    Busy,

    #[error("There is no failed message to retry")]
    NothingToRetry,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    Idle,
    Sending {
        attempt: u32,
    },
    WaitingBackoff {
        failed_attempt: u32,
        max_attempts: u32,
        delay: Duration,
    },
    Failed,
}

impl SessionStatus {
    /// "Retry n/N" while waiting after failed attempt n.
    pub fn retry_indicator(&self) -> Option<String> {
        match self {
            SessionStatus::WaitingBackoff {
                failed_attempt,
                max_attempts,
                ..
            } => Some(format!("Retry {failed_attempt}/{max_attempts}")),
            _ => None,
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            SessionStatus::Sending { .. } | SessionStatus::WaitingBackoff { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// The relay answered on attempt `attempts`.
    Replied { attempts: u32 },
    /// Every attempt failed; a fallback reply was appended.
    Exhausted,
}

struct SessionInner {
    transcript: Vec<ChatMessage>,
    history: Vec<HistoryEntry>,
    draft: String,
    in_flight: bool,
    failed_message: Option<String>,
    notices: Vec<Notice>,
}

/// One AI Mentor conversation. Lives for a single UI session and is never persisted.
pub struct MentorSession {
    transport: Arc<dyn RelayTransport>,
    picker: Arc<dyn FallbackPicker>,
    policy: RetryPolicy,
    inner: Mutex<SessionInner>,
    status: watch::Sender<SessionStatus>,
}

impl MentorSession {
    pub fn new(transport: Arc<dyn RelayTransport>) -> Self {
        let (status, _) = watch::channel(SessionStatus::Idle);
        Self {
            transport,
            picker: Arc::new(RandomPicker),
            policy: RetryPolicy::default(),
            inner: Mutex::new(SessionInner {
                transcript: vec![ChatMessage::new(Role::Assistant, GREETING)],
                history: Vec::new(),
                draft: String::new(),
                in_flight: false,
                failed_message: None,
                notices: Vec::new(),
            }),
            status,
        }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_picker(mut self, picker: Arc<dyn FallbackPicker>) -> Self {
        self.picker = picker;
        self
    }

    fn lock_inner(&self) -> MutexGuard<'_, SessionInner> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    // ── Input ──────────────────────────────────────────────────────────────

    pub fn set_draft(&self, text: impl Into<String>) {
        self.lock_inner().draft = text.into();
    }

    pub fn draft(&self) -> String {
        self.lock_inner().draft.clone()
    }

    /// Copies suggested question `index` into the draft.
    pub fn use_suggestion(&self, index: usize) -> Option<&'static str> {
        let question = self.suggestions().get(index).copied()?;
        self.set_draft(question);
        Some(question)
    }

    /// Starter questions, offered only until the first user message.
    pub fn suggestions(&self) -> &'static [&'static str] {
        if self.lock_inner().transcript.len() == 1 {
            SUGGESTED_QUESTIONS
        } else {
            &[]
        }
    }

    // ── Sending ────────────────────────────────────────────────────────────

    pub async fn send_draft(&self) -> Result<SendOutcome, ChatError> {
        let draft = self.draft();
        self.send(&draft).await
    }

    /// Sends a new user message. The message shows in the transcript immediately;
    /// the reply (or a fallback) is appended once the attempt cycle settles.
    pub async fn send(&self, input: &str) -> Result<SendOutcome, ChatError> {
        let message = input.trim();
        if message.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        {
            let mut inner = self.lock_inner();
            if inner.in_flight {
                return Err(ChatError::Busy);
            }
            inner.in_flight = true;
            inner.failed_message = None;
            inner.draft.clear();
            inner.transcript.push(ChatMessage::new(Role::User, message));
        }

        Ok(self.run_attempts(message.to_string()).await)
    }

    /// Resubmits the last failed message, starting again from attempt 1.
    /// The user message is already in the transcript and is not appended twice.
    pub async fn retry_last(&self) -> Result<SendOutcome, ChatError> {
        let message = {
            let mut inner = self.lock_inner();
            if inner.in_flight {
                return Err(ChatError::Busy);
            }
            let message = inner
                .failed_message
                .take()
                .ok_or(ChatError::NothingToRetry)?;
            inner.in_flight = true;
            message
        };

        info!("Retrying last failed mentor message");
        Ok(self.run_attempts(message).await)
    }

    async fn run_attempts(&self, message: String) -> SendOutcome {
        let max_attempts = self.policy.max_attempts.max(1);

        for attempt in 1..=max_attempts {
            self.status.send_replace(SessionStatus::Sending { attempt });

            let request = RelayRequest {
                message: Some(message.clone()),
                conversation_history: self.forwarded_history(),
            };

            match self.transport.send(&request).await {
                Ok(reply) => {
                    debug!("Mentor reply received on attempt {attempt}");
                    self.record_reply(reply);
                    return SendOutcome::Replied { attempts: attempt };
                }
                Err(e) if self.policy.has_attempt_after(attempt) => {
                    let delay = self.policy.delay_after(attempt);
                    warn!(
                        "Mentor send attempt {}/{} failed: {}; retrying after {}ms",
                        attempt,
                        max_attempts,
                        e,
                        delay.as_millis()
                    );
                    self.status.send_replace(SessionStatus::WaitingBackoff {
                        failed_attempt: attempt,
                        max_attempts,
                        delay,
                    });
                    tokio::time::sleep(delay).await;
                }
                Err(e) => {
                    warn!("Mentor send attempt {attempt}/{max_attempts} failed: {e}; giving up");
                }
            }
        }

        self.record_exhaustion(message);
        SendOutcome::Exhausted
    }

    fn forwarded_history(&self) -> Vec<HistoryEntry> {
        trailing(&self.lock_inner().history, HISTORY_WINDOW).to_vec()
    }

    fn record_reply(&self, reply: RelayReply) {
        {
            let mut inner = self.lock_inner();
            inner
                .transcript
                .push(ChatMessage::new(Role::Assistant, reply.response));
            inner.history = trailing(&reply.conversation_history, HISTORY_WINDOW).to_vec();
            inner.failed_message = None;
            inner.in_flight = false;
        }
        self.status.send_replace(SessionStatus::Idle);
    }

    fn record_exhaustion(&self, message: String) {
        {
            let mut inner = self.lock_inner();
            let fallback = choose_fallback(self.picker.as_ref());
            inner
                .transcript
                .push(ChatMessage::new(Role::Assistant, fallback));
            inner.notices.push(Notice::destructive(
                "Connection Issue",
                "Our AI mentor is busy. Please try again in a few seconds.",
            ));
            inner.failed_message = Some(message);
            inner.in_flight = false;
        }
        self.status.send_replace(SessionStatus::Failed);
    }

    // ── Views ──────────────────────────────────────────────────────────────

    pub fn transcript(&self) -> Vec<ChatMessage> {
        self.lock_inner().transcript.clone()
    }

    pub fn history(&self) -> Vec<HistoryEntry> {
        self.lock_inner().history.clone()
    }

    pub fn status(&self) -> SessionStatus {
        self.status.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionStatus> {
        self.status.subscribe()
    }

    /// Send control is disabled while a request or backoff wait is outstanding.
    pub fn is_busy(&self) -> bool {
        self.lock_inner().in_flight
    }

    /// Whether the "Retry Last Message" control should be shown.
    pub fn can_retry(&self) -> bool {
        let inner = self.lock_inner();
        !inner.in_flight && inner.failed_message.is_some()
    }

    pub fn failed_message(&self) -> Option<String> {
        self.lock_inner().failed_message.clone()
    }

    pub fn take_notices(&self) -> Vec<Notice> {
        std::mem::take(&mut self.lock_inner().notices)
    }
}
