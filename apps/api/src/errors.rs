use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::publish::PublishError;
use crate::site::extractor::ExtractError;
use crate::site::record::RecordError;
use crate::site::renderer::RenderError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// The model replied with text that is not JSON. Carries the raw reply.
    #[error("Model reply is not valid JSON")]
    ExtractionFormat(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Invalid site record: {0}")]
    RecordValidation(#[from] RecordError),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Publish error: {0}")]
    Publish(#[from] PublishError),
}

impl From<ExtractError> for AppError {
    fn from(e: ExtractError) -> Self {
        match e {
            ExtractError::InvalidJson { raw, .. } => AppError::ExtractionFormat(raw),
            ExtractError::Llm(e) => AppError::Llm(e),
            ExtractError::Record(e) => AppError::RecordValidation(e),
        }
    }
}

impl From<RenderError> for AppError {
    fn from(e: RenderError) -> Self {
        match e {
            RenderError::Record(e) => AppError::RecordValidation(e),
            RenderError::Template(msg) => AppError::Render(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::ExtractionFormat(raw) => {
                tracing::warn!("Unparseable model reply: {raw}");
                // Plain text so the operator sees exactly what the model produced.
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                    raw.clone(),
                )
                    .into_response();
            }
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LLM_ERROR",
                    "An AI processing error occurred".to_string(),
                )
            }
            AppError::RecordValidation(e) => {
                tracing::error!("Invalid site record: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INVALID_SITE_RECORD",
                    e.to_string(),
                )
            }
            AppError::Render(msg) => {
                tracing::error!("Render error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "RENDER_ERROR",
                    "Failed to render the website".to_string(),
                )
            }
            AppError::Publish(e) => {
                tracing::error!("Publish error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PUBLISH_ERROR",
                    "Failed to publish the website".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
