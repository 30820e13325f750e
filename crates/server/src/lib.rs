//! HTTP relay that asks a chat-completion model for the next chess move.

pub mod clients;
pub mod config;
pub mod error;
pub mod routes;

use axum::{
    response::{IntoResponse, Response},
    Extension, Router,
};
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};

use crate::clients::openai::OpenAiClient;
use crate::config::Config;
use crate::error::AppError;

/// Build the router. Every path and method lands on the relay handler.
pub fn app(config: &Config, client: OpenAiClient) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .fallback(routes::relay::relay)
        .layer(Extension(config.clone()))
        .layer(Extension(client))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
}

/// Serve the relay on an already-bound listener until the server stops.
pub async fn serve(listener: TcpListener, config: Config) -> anyhow::Result<()> {
    let client = OpenAiClient::new(&config)?;
    axum::serve(listener, app(&config, client)).await?;
    Ok(())
}

fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic"
    };
    AppError::Internal(format!("request handler panicked: {detail}")).into_response()
}
