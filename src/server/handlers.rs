use super::types::{
    ChatRequest, ChatResponse, EndpointList, ErrorResponse, HealthResponse, IdeaRequest,
    IdeasResponse, RefineRequest, RefineResponse, ServiceStatus, SummarizeRequest,
    SummarizeResponse,
};
use crate::{Error, gateway::PromptGateway};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<PromptGateway>,
    pub model: Arc<str>,
    pub credential_configured: bool,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

fn error_response(operation: &str, e: Error) -> ApiError {
    let status = e.status_code();
    match &e {
        Error::Validation { .. } => warn!("Rejected {} request: {}", operation, e),
        _ => error!("Failed to process {} request: {}", operation, e),
    }
    (
        status,
        Json(ErrorResponse {
            error: e.client_message(),
        }),
    )
}

fn parse_body<T>(operation: &str, payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(request)| request)
        .map_err(|rejection| error_response(operation, rejection.into()))
}

pub async fn root() -> Result<String, ApiError> {
    let status = ServiceStatus {
        status: "Backend is running successfully ✅",
        test_endpoints: EndpointList {
            summarize: "/api/summarize",
            generate_ideas: "/api/generate-ideas",
            refine_content: "/api/refine-content",
            chat: "/api/chat",
        },
        usage: "Send POST requests with JSON body to these endpoints.",
    };

    serde_json::to_string_pretty(&status).map_err(|e| error_response("root", e.into()))
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        model: state.model.to_string(),
        credential_configured: state.credential_configured,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

pub async fn summarize(
    State(state): State<AppState>,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<Json<SummarizeResponse>, ApiError> {
    let request = parse_body("summarize", payload)?;
    info!("Received summarize request ({} chars)", request.text.chars().count());

    let summary = state
        .gateway
        .summarize(&request.text)
        .await
        .map_err(|e| error_response("summarize", e))?;

    Ok(Json(SummarizeResponse { summary }))
}

pub async fn generate_ideas(
    State(state): State<AppState>,
    payload: Result<Json<IdeaRequest>, JsonRejection>,
) -> Result<Json<IdeasResponse>, ApiError> {
    let request = parse_body("generate_ideas", payload)?;
    info!(
        "Received generate-ideas request (topic of {} chars)",
        request.topic.chars().count()
    );

    let ideas = state
        .gateway
        .generate_ideas(&request.topic)
        .await
        .map_err(|e| error_response("generate_ideas", e))?;

    Ok(Json(IdeasResponse { ideas }))
}

pub async fn refine_content(
    State(state): State<AppState>,
    payload: Result<Json<RefineRequest>, JsonRejection>,
) -> Result<Json<RefineResponse>, ApiError> {
    let request = parse_body("refine_content", payload)?;
    info!(
        "Received refine-content request ({} chars)",
        request.text.chars().count()
    );

    let refined_text = state
        .gateway
        .refine_content(&request.text, request.instruction.as_deref())
        .await
        .map_err(|e| error_response("refine_content", e))?;

    Ok(Json(RefineResponse { refined_text }))
}

pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let request = parse_body("chat", payload)?;
    let input = request.effective_input();
    info!("Received chat request ({} chars)", input.chars().count());

    let response = state
        .gateway
        .chat(input)
        .await
        .map_err(|e| error_response("chat", e))?;

    Ok(Json(ChatResponse { response }))
}
