// AI Mentor relay: system-prompt injection, history windowing, one provider call.
// All provider calls go through llm_client.

pub mod handlers;
pub mod relay;
