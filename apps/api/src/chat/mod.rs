//! AI Mentor chat client: the widget-side conversation model.
//!
//! `MentorSession` owns the transcript and the trailing history, sends each
//! user message to the relay through a `RelayTransport`, and retries transient
//! failures with exponential backoff before falling back to an apology.

pub mod backoff;
pub mod fallback;
pub mod repl;
pub mod session;
pub mod transport;

pub use backoff::RetryPolicy;
pub use fallback::{FallbackPicker, RandomPicker};
pub use session::{ChatError, MentorSession, SendOutcome, SessionStatus};
pub use transport::{HttpRelay, RelayTransport, TransportError};

/// First assistant line of every new session.
pub const GREETING: &str = "Hello! I'm your AI Career Mentor. I'm here to help you with career \
advice, resume tips, interview preparation, skill development, and more. \
What would you like to discuss today?";

/// Starter questions offered while the transcript holds only the greeting.
pub const SUGGESTED_QUESTIONS: &[&str] = &[
    "How do I optimize my resume for ATS?",
    "What skills should I learn for software engineering?",
    "How do I prepare for FAANG interviews?",
    "What's the best way to negotiate salary?",
    "How do I build a strong LinkedIn profile?",
];
