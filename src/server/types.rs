use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct IdeaRequest {
    pub topic: String,
}

#[derive(Debug, Deserialize)]
pub struct RefineRequest {
    pub text: String,
    #[serde(default)]
    pub instruction: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
    /// Accepted for client compatibility; conversations are not replayed.
    #[serde(default)]
    pub history: Option<Vec<serde_json::Value>>,
}

impl ChatRequest {
    /// `message` if non-empty, else `query` if non-empty, else `""`.
    pub fn effective_input(&self) -> &str {
        [self.message.as_deref(), self.query.as_deref()]
            .into_iter()
            .flatten()
            .find(|input| !input.is_empty())
            .unwrap_or_default()
    }
}

#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct IdeasResponse {
    pub ideas: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RefineResponse {
    #[serde(rename = "refinedText")]
    pub refined_text: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct ServiceStatus {
    pub status: &'static str,
    pub test_endpoints: EndpointList,
    pub usage: &'static str,
}

#[derive(Debug, Serialize)]
pub struct EndpointList {
    #[serde(rename = "Summarize")]
    pub summarize: &'static str,
    #[serde(rename = "Generate Ideas")]
    pub generate_ideas: &'static str,
    #[serde(rename = "Refine Content")]
    pub refine_content: &'static str,
    #[serde(rename = "Chat")]
    pub chat: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub model: String,
    pub credential_configured: bool,
    pub timestamp: String,
}
