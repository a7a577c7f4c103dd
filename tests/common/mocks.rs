use async_trait::async_trait;
use gemini_relay::{
    Error, Result,
    llm::{GenerateContentRequest, GenerateContentResponse, LlmClient},
};
use std::sync::{Arc, Mutex};

type Reply = Arc<dyn Fn() -> Result<GenerateContentResponse> + Send + Sync>;

/// Mock generation client that records every request it receives
pub struct MockLlmClient {
    pub requests: Arc<Mutex<Vec<GenerateContentRequest>>>,
    reply: Reply,
}

impl MockLlmClient {
    /// Answers every call with one candidate carrying `text`
    pub fn with_text(text: impl Into<String>) -> Self {
        let response = GenerateContentResponse::from_text(text);
        Self::with_response(response)
    }

    pub fn with_response(response: GenerateContentResponse) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            reply: Arc::new(move || Ok(response.clone())),
        }
    }

    pub fn with_error<F>(make_error: F) -> Self
    where
        F: Fn() -> Error + Send + Sync + 'static,
    {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            reply: Arc::new(move || Err(make_error())),
        }
    }

    pub fn get_requests(&self) -> Vec<GenerateContentRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Prompts in the order they were sent
    pub fn prompts(&self) -> Vec<String> {
        self.get_requests()
            .iter()
            .map(|request| request.prompt().unwrap_or_default().to_string())
            .collect()
    }

    pub fn last_prompt(&self) -> String {
        self.prompts().pop().expect("no request was recorded")
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        self.requests.lock().unwrap().push(request);
        (self.reply)()
    }
}
