//! Axum route handlers for the AI Mentor relay.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Serialize;

use crate::chat::SUGGESTED_QUESTIONS;
use crate::mentor::relay::{relay, MentorError};
use crate::models::chat::{RelayReply, RelayRequest};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: &'static [&'static str],
}

/// POST /api/v1/mentor/chat (also mounted at /functions/v1/ai-mentor)
pub async fn handle_mentor_chat(
    State(state): State<AppState>,
    payload: Result<Json<RelayRequest>, JsonRejection>,
) -> Result<Json<RelayReply>, MentorError> {
    let Json(request) = payload.map_err(|e| MentorError::InvalidBody(e.body_text()))?;
    let reply = relay(&state.llm, request).await?;
    Ok(Json(reply))
}

/// GET /api/v1/mentor/suggestions
pub async fn handle_suggestions() -> Json<SuggestionsResponse> {
    Json(SuggestionsResponse {
        suggestions: SUGGESTED_QUESTIONS,
    })
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::routes::build_router;
    use crate::test_support::{
        read_json, spawn_mock_provider, state_with_provider, ProviderReply,
    };

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_relay_round_trip_returns_windowed_history() {
        let provider = spawn_mock_provider(vec![ProviderReply::text("Practice your pitch.")]).await;
        let app = build_router(state_with_provider(&provider.url, Some("sk-test")));

        let history: Vec<Value> = (0..6)
            .map(|i| {
                let role = if i % 2 == 0 { "user" } else { "assistant" };
                json!({"role": role, "content": format!("turn {i}")})
            })
            .collect();

        let response = app
            .oneshot(post_json(
                "/api/v1/mentor/chat",
                json!({"message": "How do I negotiate salary?", "conversationHistory": history}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = read_json(response).await;
        assert_eq!(body["response"], "Practice your pitch.");
        let returned = body["conversationHistory"].as_array().unwrap();
        assert_eq!(returned.len(), 6);
        assert_eq!(returned[0]["content"], "turn 2");
        assert_eq!(returned[4]["content"], "How do I negotiate salary?");
        assert_eq!(returned[5]["role"], "assistant");

        let seen = provider.seen_bodies().await;
        assert_eq!(seen.len(), 1);
        let messages = seen[0]["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 8);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(provider.seen_auth_headers().await, vec!["Bearer sk-test"]);
    }

    #[tokio::test]
    async fn test_legacy_path_is_the_same_relay() {
        let provider = spawn_mock_provider(vec![ProviderReply::text("Hello!")]).await;
        let app = build_router(state_with_provider(&provider.url, Some("sk-test")));

        let response = app
            .oneshot(post_json("/functions/v1/ai-mentor", json!({"message": "hi"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["conversationHistory"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_missing_message_returns_fallback_body() {
        let provider = spawn_mock_provider(vec![]).await;
        let app = build_router(state_with_provider(&provider.url, Some("sk-test")));

        let response = app
            .oneshot(post_json("/api/v1/mentor/chat", json!({"conversationHistory": []})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert_eq!(body["error"], "Message is required");
        assert!(body["response"].as_str().unwrap().starts_with("I apologize"));
        assert!(provider.seen_bodies().await.is_empty());
    }

    #[tokio::test]
    async fn test_missing_key_is_generic_failure() {
        let provider = spawn_mock_provider(vec![]).await;
        let app = build_router(state_with_provider(&provider.url, None));

        let response = app
            .oneshot(post_json("/api/v1/mentor/chat", json!({"message": "hi"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = read_json(response).await;
        assert_eq!(body["error"], "OpenAI API key not configured");
    }

    #[tokio::test]
    async fn test_provider_error_is_propagated_once() {
        let provider = spawn_mock_provider(vec![ProviderReply::error(
            StatusCode::SERVICE_UNAVAILABLE,
            "overloaded",
        )])
        .await;
        let app = build_router(state_with_provider(&provider.url, Some("sk-test")));

        let response = app
            .oneshot(post_json("/api/v1/mentor/chat", json!({"message": "hi"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = read_json(response).await;
        assert_eq!(body["error"], "OpenAI API error: overloaded");
        // The relay never retries on its own side.
        assert_eq!(provider.seen_bodies().await.len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_body_uses_relay_error_shape() {
        let provider = spawn_mock_provider(vec![]).await;
        let app = build_router(state_with_provider(&provider.url, Some("sk-test")));

        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/mentor/chat")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
        assert!(body["response"].is_string());
    }

    #[tokio::test]
    async fn test_suggestions_lists_starter_questions() {
        let provider = spawn_mock_provider(vec![]).await;
        let app = build_router(state_with_provider(&provider.url, None));

        let request = Request::builder()
            .uri("/api/v1/mentor/suggestions")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["suggestions"].as_array().unwrap().len(), 5);
    }
}
