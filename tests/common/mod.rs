#![allow(dead_code)]

use std::time::Duration;

use mockito::{Mock, ServerGuard};
use relay_server::config::Config;
use serde_json::json;
use tokio::net::TcpListener;

pub const API_KEY: &str = "sk-test-key";
pub const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Relay config pointed at a stub upstream.
pub fn config_for(upstream: &ServerGuard) -> Config {
    Config {
        openai_api_key: Some(API_KEY.to_string()),
        openai_base_url: format!("{}/v1", upstream.url()),
        upstream_timeout: Duration::from_secs(5),
        ..Config::default()
    }
}

/// Start the relay on an ephemeral port and return its base URL.
pub async fn spawn_relay(config: Config) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind relay");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        relay_server::serve(listener, config)
            .await
            .expect("Relay stopped");
    });
    format!("http://{addr}")
}

/// Provider-shaped success body with `content` as the first choice.
pub fn completion_body(content: &str) -> String {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop",
        }],
    })
    .to_string()
}

/// Stub a completion that answers with `content`.
pub async fn mock_move(upstream: &mut ServerGuard, content: &str) -> Mock {
    upstream
        .mock("POST", COMPLETIONS_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(content))
        .create_async()
        .await
}

/// A listener that accepts connections and never answers.
pub async fn silent_upstream() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });
    format!("http://{addr}/v1")
}

/// Base URL of a port that was bound and released, so connections are refused.
pub async fn closed_upstream() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/v1")
}
