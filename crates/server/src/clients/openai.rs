use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

/// Only the part of the provider's reply we read: `choices[0].message.content`.
#[derive(Debug, Default, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ReplyMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ReplyMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    pub fn into_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("upstream returned HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("upstream request timed out")]
    Timeout,

    #[error("upstream request failed: {0}")]
    Transport(reqwest::Error),

    #[error("upstream response could not be decoded: {0}")]
    Decode(reqwest::Error),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            UpstreamError::Timeout
        } else if e.is_decode() {
            UpstreamError::Decode(e)
        } else {
            UpstreamError::Transport(e)
        }
    }
}

/// Upstream error bodies longer than this are cut before they are logged.
pub const MAX_ERROR_BODY_BYTES: usize = 4 * 1024;

/// Cut `body` to at most `max` bytes on a char boundary, marking the cut.
fn truncate_body(mut body: String, max: usize) -> String {
    if body.len() <= max {
        return body;
    }
    let mut end = max;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    let dropped = body.len() - end;
    body.truncate(end);
    body.push_str(&format!("... [{dropped} bytes truncated]"));
    body
}

/// Chat-completion client. Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl OpenAiClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent("ChessMoveRelay/1.0")
            .timeout(config.upstream_timeout)
            .build()?;
        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", config.openai_base_url),
            api_key: config.openai_api_key.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one completion request.
    /// Returns the raw `choices[0].message.content`, `None` if the reply had none.
    pub async fn complete(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<Option<String>, UpstreamError> {
        let mut req = self.client.post(&self.endpoint).json(request);
        // Without a key the provider rejects the call; that surfaces as a status error.
        if let Some(key) = &self.api_key {
            req = req.bearer_auth(key);
        }

        let resp = req.send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(UpstreamError::Status {
                status,
                body: truncate_body(body, MAX_ERROR_BODY_BYTES),
            });
        }

        let data: ChatCompletionResponse = resp.json().await?;
        Ok(data.into_content())
    }
}
