//! Error types for Switchboard
//!
//! Every failure on the request path is an [`AppError`]; it renders as
//! `{error, detail?}` with a status reflecting the failure class.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

use crate::provider::ProviderKind;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid JSON body: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Message is required")]
    MissingMessage,

    #[error("Unsupported provider: {0}")]
    UnsupportedProvider(String),

    #[error("Invalid model name: {0}")]
    InvalidModel(String),

    #[error("Missing API key for provider {0}")]
    MissingApiKey(ProviderKind),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("{provider} returned {status}")]
    Provider {
        provider: ProviderKind,
        status: u16,
        body: Value,
    },

    /// Transport failure; always stored without its URL, which may carry a key
    #[error("HTTP client error: {0}")]
    HttpError(#[source] reqwest::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl AppError {
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidJson(_)
            | AppError::MissingMessage
            | AppError::UnsupportedProvider(_)
            | AppError::InvalidModel(_)
            | AppError::MissingApiKey(_)
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Provider { .. } | AppError::HttpError(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Metrics label for this error
    pub fn label(&self) -> &'static str {
        match self {
            AppError::InvalidJson(_)
            | AppError::MissingMessage
            | AppError::UnsupportedProvider(_)
            | AppError::InvalidModel(_)
            | AppError::MissingApiKey(_)
            | AppError::BadRequest(_) => "invalid_request",
            AppError::MethodNotAllowed => "method_not_allowed",
            AppError::Provider { .. } => "provider_error",
            AppError::HttpError(_) => "transport_error",
            AppError::Internal(_) => "internal_error",
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::HttpError(e.without_url())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let (message, detail) = match &self {
            AppError::InvalidJson(e) => ("Invalid JSON body".to_string(), Some(e.to_string())),
            AppError::Provider {
                provider,
                status,
                body,
            } => (
                "Provider request failed".to_string(),
                Some(format!("{} returned {}: {}", provider, status, body)),
            ),
            AppError::HttpError(e) => {
                error!(error = %e, "Provider call failed before a response was received");
                ("Provider request failed".to_string(), Some(e.to_string()))
            }
            AppError::Internal(e) => {
                error!(error = %e, "Internal error");
                ("Internal server error".to_string(), Some(e.to_string()))
            }
            other => (other.to_string(), None),
        };

        let body = ErrorResponse {
            error: message,
            detail,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
