pub mod handlers;
pub mod types;

pub use handlers::AppState;

use crate::{
    Error, Result,
    config::{Config, CorsConfig, LlmConfig},
    gateway::PromptGateway,
    llm::{GeminiClient, LlmClient},
};
use axum::{
    Router,
    extract::Request,
    http::HeaderValue,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, info_span, warn};
use uuid::Uuid;

impl AppState {
    pub fn new(llm_client: Arc<dyn LlmClient>, llm_config: &LlmConfig) -> Self {
        Self {
            gateway: Arc::new(PromptGateway::new(llm_client)),
            model: Arc::from(llm_config.model.as_str()),
            credential_configured: llm_config.has_api_key(),
        }
    }
}

/// Credentialed CORS for the configured origins. Methods and headers are
/// mirrored from the preflight since wildcards are not allowed with credentials.
pub fn cors_layer(cors: &CorsConfig) -> Result<CorsLayer> {
    let origins = cors
        .allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| Error::config(format!("Invalid CORS origin: '{origin}'")))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}

pub fn router(state: AppState, cors: &CorsConfig) -> Result<Router> {
    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request| {
        info_span!(
            "http_request",
            request_id = %Uuid::new_v4(),
            method = %request.method(),
            uri = %request.uri(),
        )
    });

    let app = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/api/summarize", post(handlers::summarize))
        .route("/api/generate-ideas", post(handlers::generate_ideas))
        .route("/api/refine-content", post(handlers::refine_content))
        .route("/api/chat", post(handlers::chat))
        .layer(ServiceBuilder::new().layer(trace).layer(cors_layer(cors)?))
        .with_state(state);

    Ok(app)
}

pub async fn run(config: Config) -> Result<()> {
    if !config.llm.has_api_key() {
        warn!("GEMINI_API_KEY is not set; generation requests will fail until it is configured");
    }

    let llm_client = GeminiClient::new(config.llm.clone())?;
    info!("Using Gemini model {}", llm_client.model());

    let app_state = AppState::new(Arc::new(llm_client), &config.llm);
    let app = router(app_state, &config.server.cors)?;

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
