use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// The judge could not be reached or failed transport-side. Retryable by the caller.
    #[error("External judge unavailable: {0}")]
    ExternalUnavailable(String),

    /// The judge answered, but its output could not be turned into a judgment.
    #[error("External judgment unparsable: {0}")]
    ExternalUnparsable(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        if err.is_retryable() {
            AppError::ExternalUnavailable(err.to_string())
        } else {
            AppError::ExternalUnparsable(err.to_string())
        }
    }
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::ExternalUnavailable(msg) => {
                tracing::error!("Judge unavailable: {msg}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "EXTERNAL_UNAVAILABLE",
                    "The AI service is temporarily unavailable, please retry".to_string(),
                )
            }
            AppError::ExternalUnparsable(msg) => {
                tracing::error!("Judge output unparsable: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "EXTERNAL_UNPARSABLE",
                    "The AI service returned a response that could not be understood".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
