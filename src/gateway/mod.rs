pub mod prompts;

use crate::{
    Result,
    llm::{GenerateContentRequest, LlmClient},
};
use std::sync::Arc;
use tracing::{debug, info};

/// Turns tool inputs into prompts, runs them through the generation client
/// and shapes the reply.
#[derive(Clone)]
pub struct PromptGateway {
    llm_client: Arc<dyn LlmClient>,
}

impl PromptGateway {
    pub fn new(llm_client: Arc<dyn LlmClient>) -> Self {
        Self { llm_client }
    }

    pub async fn summarize(&self, text: &str) -> Result<String> {
        self.generate("summarize", prompts::summarize(text)).await
    }

    pub async fn generate_ideas(&self, topic: &str) -> Result<Vec<String>> {
        let raw = self
            .generate("generate_ideas", prompts::generate_ideas(topic))
            .await?;
        let ideas = prompts::parse_ideas(&raw);
        debug!("Parsed {} ideas from generated text", ideas.len());
        Ok(ideas)
    }

    pub async fn refine_content(&self, text: &str, instruction: Option<&str>) -> Result<String> {
        let instruction = prompts::resolve_instruction(instruction);
        self.generate("refine_content", prompts::refine_content(text, instruction))
            .await
    }

    pub async fn chat(&self, input: &str) -> Result<String> {
        self.generate("chat", prompts::chat(input)).await
    }

    async fn generate(&self, task: &str, prompt: String) -> Result<String> {
        info!("Running {} prompt ({} chars)", task, prompt.chars().count());

        let response = self
            .llm_client
            .generate_content(GenerateContentRequest::from_prompt(prompt))
            .await?;

        response.into_text()
    }
}
