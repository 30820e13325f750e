use axum::{
    extract::Request,
    http::{header, Method},
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::Serialize;

use chess_core::prompt::{self, SYSTEM_PROMPT};
use chess_core::{MoveHistory, MoveValidation};

use crate::clients::openai::{ChatCompletionRequest, ChatMessage, OpenAiClient};
use crate::config::Config;
use crate::error::AppError;

pub const USAGE: &str =
    r#"AI chess moves server. POST / with JSON { moves: [{ from: "e2", to: "e4", capture: false }] }"#;

#[derive(Debug, Serialize)]
pub struct MoveResponse {
    #[serde(rename = "move")]
    pub uci: String,
}

/// Any path, any method.
/// GET returns the usage banner; everything else asks the model for the next move.
pub async fn relay(
    Extension(config): Extension<Config>,
    Extension(client): Extension<OpenAiClient>,
    request: Request,
) -> Result<Response, AppError> {
    if request.method() == Method::GET {
        return Ok(USAGE.into_response());
    }

    let history = read_history(request, config.max_body_bytes).await?;
    tracing::debug!(moves = history.len(), model = %config.model, "Requesting move");

    let completion = build_request(&config.model, &history);
    let reply = client.complete(&completion).await?;
    let uci = extract_move(reply, config.move_validation)?;

    Ok(Json(MoveResponse { uci }).into_response())
}

/// Buffer the body (at most `limit` bytes) and parse `{ moves: [...] }`.
async fn read_history(request: Request, limit: usize) -> Result<MoveHistory, AppError> {
    let declared = request
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<usize>().ok());
    if declared.is_some_and(|len| len > limit) {
        return Err(AppError::PayloadTooLarge);
    }

    // Past the header check this fails on a chunked body over the limit or a
    // broken body stream; the cause is logged with the response.
    let bytes = axum::body::to_bytes(request.into_body(), limit)
        .await
        .map_err(AppError::BodyRead)?;

    Ok(serde_json::from_slice(&bytes)?)
}

pub fn build_request(model: &str, history: &MoveHistory) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: model.to_string(),
        messages: vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(prompt::user_prompt(history)),
        ],
    }
}

/// Trim the model's reply and apply `validation` to it.
pub fn extract_move(reply: Option<String>, validation: MoveValidation) -> Result<String, AppError> {
    let trimmed = reply.as_deref().map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(AppError::EmptyReply(reply));
    }

    match validation.accept(trimmed) {
        Some(uci) => Ok(uci.to_string()),
        None => Err(AppError::InvalidMove(trimmed.to_string())),
    }
}
