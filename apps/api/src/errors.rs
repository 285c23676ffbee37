use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::roadmap::splitter::ExtractionError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant is terminal for the request: nothing is retried and no
/// partial roadmap is ever returned.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Llm(#[from] LlmError),

    #[error("Failed to parse structured data from response: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    fn code(&self) -> &'static str {
        match self {
            AppError::Llm(_) => "LLM_ERROR",
            AppError::Extraction(_) => "STRUCTURED_DATA_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Every variant is a 500 carrying the underlying description.
        let message = self.to_string();
        match &self {
            AppError::Llm(_) => tracing::error!("LLM error: {message}"),
            AppError::Extraction(_) => tracing::error!("Extraction error: {message}"),
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
        }

        let body = Json(json!({
            "error": {
                "code": self.code(),
                "message": message
            }
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
