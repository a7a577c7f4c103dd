use super::types::*;
use crate::{Error, Result, config::LlmConfig};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse>;
}

pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
    timeout_secs: u64,
}

impl GeminiClient {
    pub fn new(config: LlmConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let api_key = config.api_key.filter(|key| !key.is_empty());

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model,
            api_key,
            timeout_secs: config.timeout_secs,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    fn transport_error(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::UpstreamTimeout {
                secs: self.timeout_secs,
            }
        } else {
            // The URL carries the key as a query parameter.
            Error::Network(e.without_url())
        }
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let api_key = self.api_key.as_deref().ok_or(Error::UpstreamConfig)?;

        debug!(
            "Calling Gemini model {} with {} content entries",
            self.model,
            request.contents.len()
        );

        let response = self
            .http
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Gemini API returned HTTP {}: {}", status, body);
            return Err(Error::UpstreamHttp {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;

        let body: serde_json::Value = serde_json::from_slice(&body).map_err(|e| {
            warn!("Failed to parse Gemini response: {}", e);
            Error::UpstreamShape
        })?;

        let parsed = GenerateContentResponse::from_json(&body).ok_or_else(|| {
            warn!("Gemini response has no candidates[0].content.parts[0].text");
            Error::UpstreamShape
        })?;

        debug!("Received Gemini response from model {}", self.model);

        Ok(parsed)
    }
}
