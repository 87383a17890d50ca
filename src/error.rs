use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use miette::Diagnostic;
use thiserror::Error;
use tracing::error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Environment error: {0}")]
    #[diagnostic(code(flowdate::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(flowdate::config))]
    Config(String),

    #[error("Parsing service unreachable: {0}")]
    #[diagnostic(code(flowdate::parse_service::transport))]
    Transport(#[from] reqwest::Error),

    #[error("Parsing service answered HTTP {status}: {body}")]
    #[diagnostic(code(flowdate::parse_service::status))]
    ServiceStatus { status: u16, body: String },

    #[error("Parsing service sent an unreadable body: {0}")]
    #[diagnostic(code(flowdate::parse_service::decode))]
    Decode(String),

    #[error("Playground error: {0}")]
    #[diagnostic(code(flowdate::playground))]
    Playground(String),

    #[error("Template error: {0}")]
    #[diagnostic(code(flowdate::template))]
    Template(#[from] askama::Error),

    #[error(transparent)]
    #[diagnostic(code(flowdate::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(flowdate::serialization))]
    Serialization(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        error!("Request failed: {}", self);
        let status = match self {
            Error::Transport(_) | Error::ServiceStatus { .. } | Error::Decode(_) => {
                StatusCode::BAD_GATEWAY
            }
            Error::Playground(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, status.canonical_reason().unwrap_or("Error")).into_response()
    }
}

/// Type alias for Result with our Error type
pub type AppResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str, reason: &str) -> Error {
    Error::Environment(format!("Invalid environment variable {}: {}", var, reason))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create playground errors
pub fn playground_error(message: &str) -> Error {
    Error::Playground(message.to_string())
}
