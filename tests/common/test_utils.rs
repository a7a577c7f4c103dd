use super::MockLlmClient;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use gemini_relay::{
    config::{CorsConfig, LlmConfig},
    server::{self, AppState},
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`

pub const FRONTEND_ORIGIN: &str = "https://shreyreely.vercel.app";
pub const LOCAL_ORIGIN: &str = "http://localhost:3000";

/// LLM config pointing at `base_url` with a test credential
pub fn create_test_llm_config(base_url: &str) -> LlmConfig {
    LlmConfig {
        base_url: base_url.to_string(),
        model: "gemini-2.0-flash".to_string(),
        api_key: Some("test-api-key".to_string()),
        timeout_secs: 60,
    }
}

/// Router wired to a mock client, with the default CORS origins
pub fn create_test_app(mock: Arc<MockLlmClient>) -> Router {
    let llm_config = create_test_llm_config("http://unused.invalid");
    let state = AppState::new(mock, &llm_config);
    server::router(state, &CorsConfig::default()).unwrap()
}

pub fn json_request(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn read_body(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// POSTs `body` as JSON and returns the status with the decoded JSON reply
pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app.oneshot(json_request(uri, &body)).await.unwrap();
    let status = response.status();
    let text = read_body(response).await;
    let value = serde_json::from_str(&text).unwrap_or(Value::String(text));
    (status, value)
}
