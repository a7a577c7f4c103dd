use gemini_relay::{
    Error,
    gateway::{PromptGateway, prompts::DEFAULT_REFINE_INSTRUCTION},
    llm::{Candidate, Content, GenerateContentResponse, Part},
};
use pretty_assertions::assert_eq;
use std::sync::Arc;

mod common;
use common::MockLlmClient;

fn gateway_with(mock: &Arc<MockLlmClient>) -> PromptGateway {
    PromptGateway::new(mock.clone())
}

#[tokio::test]
async fn test_summarize_passes_text_through() {
    let mock = Arc::new(MockLlmClient::with_text("Short.\n"));
    let summary = gateway_with(&mock).summarize("A long story").await.unwrap();

    assert_eq!(summary, "Short.\n");
    assert_eq!(
        mock.prompts(),
        vec!["Summarize this text concisely:\n\nA long story"]
    );
}

#[tokio::test]
async fn test_one_upstream_call_per_operation() {
    let mock = Arc::new(MockLlmClient::with_text("x"));
    let gateway = gateway_with(&mock);

    gateway.summarize("a").await.unwrap();
    gateway.generate_ideas("b").await.unwrap();
    gateway.refine_content("c", None).await.unwrap();
    gateway.chat("d").await.unwrap();

    assert_eq!(mock.call_count(), 4);
    for request in mock.get_requests() {
        assert_eq!(request.contents.len(), 1);
        assert_eq!(request.contents[0].parts.len(), 1);
        assert_eq!(request.contents[0].role, None);
    }
}

#[tokio::test]
async fn test_ideas_keep_order_and_duplicates() {
    let mock = Arc::new(MockLlmClient::with_text(
        "• Zebra crossing art\n\n- Zebra crossing art\n* Apple picking\n",
    ));
    let ideas = gateway_with(&mock).generate_ideas("street").await.unwrap();

    assert_eq!(
        ideas,
        vec!["Zebra crossing art", "Zebra crossing art", "Apple picking"]
    );
}

#[tokio::test]
async fn test_refine_resolves_default_instruction() {
    let mock = Arc::new(MockLlmClient::with_text("ok"));
    let gateway = gateway_with(&mock);

    gateway.refine_content("draft", None).await.unwrap();
    gateway.refine_content("draft", Some("")).await.unwrap();
    gateway.refine_content("draft", Some("Shorten")).await.unwrap();

    let prompts = mock.prompts();
    let expected_default = format!(
        "Refine the following text according to this instruction: '{DEFAULT_REFINE_INSTRUCTION}'.\n\nText:\ndraft"
    );
    assert_eq!(prompts[0], expected_default);
    assert_eq!(prompts[1], expected_default);
    assert_eq!(
        prompts[2],
        "Refine the following text according to this instruction: 'Shorten'.\n\nText:\ndraft"
    );
}

#[tokio::test]
async fn test_only_first_candidate_and_part_are_read() {
    let text_part = |text: &str| Part {
        text: Some(text.to_string()),
    };
    let response = GenerateContentResponse {
        candidates: vec![
            Candidate {
                content: Some(Content {
                    role: Some("model".to_string()),
                    parts: vec![text_part("first part"), text_part("second part")],
                }),
            },
            Candidate {
                content: Some(Content {
                    role: Some("model".to_string()),
                    parts: vec![text_part("second candidate")],
                }),
            },
        ],
    };
    let mock = Arc::new(MockLlmClient::with_response(response));

    let reply = gateway_with(&mock).chat("hi").await.unwrap();
    assert_eq!(reply, "first part");
}

#[tokio::test]
async fn test_empty_response_is_shape_error() {
    let mock = Arc::new(MockLlmClient::with_response(GenerateContentResponse::default()));
    let result = gateway_with(&mock).generate_ideas("anything").await;

    assert!(matches!(result, Err(Error::UpstreamShape)));
}

#[tokio::test]
async fn test_client_errors_propagate_unchanged() {
    let mock = Arc::new(MockLlmClient::with_error(|| Error::UpstreamHttp {
        status: 500,
    }));
    let result = gateway_with(&mock).summarize("text").await;

    assert!(matches!(result, Err(Error::UpstreamHttp { status: 500 })));
    assert_eq!(mock.call_count(), 1);
}
