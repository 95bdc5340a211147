use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use crate::models::chat::{RelayFailure, RelayReply, RelayRequest};

const RELAY_TIMEOUT_SECS: u64 = 90;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Relay returned {status}: {message}")]
    Status { status: u16, message: String },
}

/// One outbound relay call. Implementations must not retry; the session owns retries.
#[async_trait]
pub trait RelayTransport: Send + Sync {
    async fn send(&self, request: &RelayRequest) -> Result<RelayReply, TransportError>;
}

/// Relay transport over HTTP, speaking the relay's JSON contract.
#[derive(Clone)]
pub struct HttpRelay {
    client: Client,
    url: String,
}

impl HttpRelay {
    pub fn new(url: impl Into<String>) -> anyhow::Result<Self> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(RELAY_TIMEOUT_SECS))
                .build()?,
            url: url.into(),
        })
    }
}

#[async_trait]
impl RelayTransport for HttpRelay {
    async fn send(&self, request: &RelayRequest) -> Result<RelayReply, TransportError> {
        let response = self.client.post(&self.url).json(request).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<RelayFailure>(&body)
                .map(|failure| failure.error)
                .unwrap_or(body);
            return Err(TransportError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<RelayReply>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::chat::HistoryEntry;
    use crate::routes::build_router;
    use crate::test_support::{spawn_mock_provider, state_with_provider, ProviderReply};
    use axum::http::StatusCode;
    use tokio::net::TcpListener;

    async fn spawn_relay(provider_url: &str, api_key: Option<&str>) -> String {
        let app = build_router(state_with_provider(provider_url, api_key));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/api/v1/mentor/chat")
    }

    #[tokio::test]
    async fn test_http_relay_parses_success() {
        let provider = spawn_mock_provider(vec![ProviderReply::text("Start with a range.")]).await;
        let relay_url = spawn_relay(&provider.url, Some("sk-test")).await;
        let transport = HttpRelay::new(relay_url).unwrap();

        let reply = transport
            .send(&RelayRequest {
                message: Some("How do I negotiate salary?".to_string()),
                conversation_history: vec![HistoryEntry::user("hi"), HistoryEntry::assistant("hello")],
            })
            .await
            .unwrap();

        assert_eq!(reply.response, "Start with a range.");
        assert_eq!(reply.conversation_history.len(), 4);
    }

    #[tokio::test]
    async fn test_http_relay_surfaces_relay_error_text() {
        let provider = spawn_mock_provider(vec![ProviderReply::error(
            StatusCode::TOO_MANY_REQUESTS,
            "Rate limit reached",
        )])
        .await;
        let relay_url = spawn_relay(&provider.url, Some("sk-test")).await;
        let transport = HttpRelay::new(relay_url).unwrap();

        let err = transport
            .send(&RelayRequest {
                message: Some("hi".to_string()),
                conversation_history: vec![],
            })
            .await
            .unwrap_err();

        match err {
            TransportError::Status { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "OpenAI API error: Rate limit reached");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_http_relay_connection_refused_is_http_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let transport = HttpRelay::new(format!("http://{addr}/api/v1/mentor/chat")).unwrap();
        let err = transport.send(&RelayRequest::default()).await.unwrap_err();
        assert!(matches!(err, TransportError::Http(_)));
    }
}
