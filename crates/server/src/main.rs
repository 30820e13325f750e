use anyhow::Context;
use relay_server::config::Config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env();

    if config.openai_api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY not set. Upstream calls will be rejected until it is configured.");
    }
    tracing::info!(
        model = %config.model,
        validation = %config.move_validation,
        "Relaying moves to {}",
        config.openai_base_url
    );

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("AI server listening on {addr}");

    relay_server::serve(listener, config).await
}
