mod client;
mod types;

pub use client::{GeminiClient, LlmClient};
pub use types::{Candidate, Content, GenerateContentRequest, GenerateContentResponse, Part};
