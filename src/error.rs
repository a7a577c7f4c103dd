use axum::{extract::rejection::JsonRejection, http::StatusCode};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{message}")]
    Validation { status: StatusCode, message: String },

    #[error("GEMINI_API_KEY is not set.")]
    UpstreamConfig,

    #[error("Gemini API returned HTTP {status}")]
    UpstreamHttp { status: u16 },

    #[error("Unexpected response from Gemini API")]
    UpstreamShape,

    #[error("Gemini API did not respond within {secs} seconds")]
    UpstreamTimeout { secs: u64 },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// HTTP status the relay answers with when a request fails with this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { status, .. } => *status,
            Self::UpstreamHttp { .. } | Self::UpstreamShape | Self::Network(_) => {
                StatusCode::BAD_GATEWAY
            }
            Self::UpstreamTimeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to hand back to the caller. Transport and internal failures
    /// collapse to a generic text; details only go to the logs.
    pub fn client_message(&self) -> String {
        match self {
            Self::Validation { .. }
            | Self::UpstreamConfig
            | Self::UpstreamHttp { .. }
            | Self::UpstreamShape
            | Self::UpstreamTimeout { .. } => self.to_string(),
            Self::Network(_) => "Failed to reach Gemini API".to_string(),
            _ => "Internal server error".to_string(),
        }
    }
}
