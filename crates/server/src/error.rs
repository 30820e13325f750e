use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::clients::openai::UpstreamError;

const INTERNAL_ERROR: &str = "Internal server error.";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Request body too large")]
    PayloadTooLarge,

    #[error("Failed to buffer request body: {0}")]
    BodyRead(#[source] axum::Error),

    #[error("Invalid JSON body: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error("Empty reply from model: {0:?}")]
    EmptyReply(Option<String>),

    #[error("Reply is not a move: {0:?}")]
    InvalidMove(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Status and caller-visible text. Upstream detail never reaches the caller.
    pub fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::PayloadTooLarge | AppError::BodyRead(_) => {
                (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large.")
            }
            AppError::InvalidJson(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Invalid JSON body."),
            AppError::Upstream(UpstreamError::Status { .. }) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "API error.")
            }
            AppError::Upstream(UpstreamError::Timeout) => {
                (StatusCode::GATEWAY_TIMEOUT, "Upstream timed out.")
            }
            AppError::Upstream(_) | AppError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
            }
            AppError::EmptyReply(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Empty reply from server.")
            }
            AppError::InvalidMove(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Invalid move from server.")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::PayloadTooLarge => tracing::warn!("Rejected oversized request body"),
            AppError::BodyRead(e) => tracing::warn!("Failed to buffer request body: {e}"),
            AppError::InvalidJson(e) => tracing::warn!("Malformed request body: {e}"),
            AppError::Upstream(UpstreamError::Status { status, body }) => {
                tracing::error!("OpenAI error {status}: {body}")
            }
            AppError::Upstream(e) => tracing::error!("{e}"),
            AppError::EmptyReply(raw) => {
                tracing::warn!("Could not get move from model, raw reply: {raw:?}")
            }
            AppError::InvalidMove(raw) => {
                tracing::warn!("Model reply is not a UCI move, raw reply: {raw:?}")
            }
            AppError::Internal(msg) => tracing::error!("Internal error: {msg}"),
        }

        let (status, message) = self.status_and_message();
        (status, message).into_response()
    }
}
