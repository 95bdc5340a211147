//! Shared helpers for handler and client tests: an in-process mock completion
//! provider bound to an ephemeral port, plus response decoding.

use std::collections::VecDeque;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::Response,
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::state::AppState;

#[derive(Debug, Clone)]
pub struct ProviderReply {
    status: StatusCode,
    body: Value,
}

impl ProviderReply {
    pub fn text(content: &str) -> Self {
        Self {
            status: StatusCode::OK,
            body: json!({
                "id": "chatcmpl-test",
                "choices": [{
                    "index": 0,
                    "message": {"role": "assistant", "content": content},
                    "finish_reason": "stop"
                }],
                "usage": {"prompt_tokens": 42, "completion_tokens": 7, "total_tokens": 49}
            }),
        }
    }

    pub fn error(status: StatusCode, message: &str) -> Self {
        Self {
            status,
            body: json!({"error": {"message": message, "type": "server_error"}}),
        }
    }
}

#[derive(Clone)]
struct ProviderState {
    replies: Arc<Mutex<VecDeque<ProviderReply>>>,
    seen_bodies: Arc<Mutex<Vec<Value>>>,
    seen_auth_headers: Arc<Mutex<Vec<String>>>,
}

pub struct MockProvider {
    pub url: String,
    state: ProviderState,
}

impl MockProvider {
    pub async fn seen_bodies(&self) -> Vec<Value> {
        self.state.seen_bodies.lock().await.clone()
    }

    pub async fn seen_auth_headers(&self) -> Vec<String> {
        self.state.seen_auth_headers.lock().await.clone()
    }
}

pub async fn spawn_mock_provider(replies: Vec<ProviderReply>) -> MockProvider {
    let state = ProviderState {
        replies: Arc::new(Mutex::new(VecDeque::from(replies))),
        seen_bodies: Arc::new(Mutex::new(Vec::new())),
        seen_auth_headers: Arc::new(Mutex::new(Vec::new())),
    };

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("mock provider should bind");
    let addr = listener.local_addr().expect("mock provider should have an address");

    let app = Router::new()
        .route("/v1/chat/completions", post(mock_completion))
        .with_state(state.clone());
    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("mock provider should serve");
    });

    MockProvider {
        url: format!("http://{addr}/v1/chat/completions"),
        state,
    }
}

async fn mock_completion(
    State(state): State<ProviderState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.seen_bodies.lock().await.push(body);
    if let Some(auth) = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        state.seen_auth_headers.lock().await.push(auth.to_string());
    }

    let reply = state.replies.lock().await.pop_front().unwrap_or_else(|| {
        ProviderReply::error(StatusCode::INTERNAL_SERVER_ERROR, "no scripted reply")
    });
    (reply.status, Json(reply.body))
}

pub fn state_with_provider(provider_url: &str, api_key: Option<&str>) -> AppState {
    let config = Config {
        openai_api_key: api_key.map(str::to_string),
        openai_api_url: provider_url.to_string(),
        openai_model: "test-model".to_string(),
        relay_url: "http://127.0.0.1:9/unused".to_string(),
        port: 0,
        rust_log: "debug".to_string(),
    };
    AppState::new(config).expect("state should build")
}

pub async fn read_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    serde_json::from_slice(&bytes).expect("body should be JSON")
}
