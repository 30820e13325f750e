use std::env;
use std::time::Duration;

use chess_core::MoveValidation;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Sent as a bearer token upstream. `None` still lets the server start.
    pub openai_api_key: Option<String>,
    pub model: String,
    pub openai_base_url: String,
    pub upstream_timeout: Duration,
    pub max_body_bytes: usize,
    pub move_validation: MoveValidation,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            openai_api_key: None,
            model: DEFAULT_MODEL.to_string(),
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            upstream_timeout: Duration::from_secs(30),
            max_body_bytes: 64 * 1024,
            move_validation: MoveValidation::Off,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from any variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let move_validation = match var("MOVE_VALIDATION") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("{e}; falling back to {}", defaults.move_validation);
                defaults.move_validation
            }),
            None => defaults.move_validation,
        };

        Self {
            host: var("HOST").unwrap_or(defaults.host),
            port: var("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            openai_api_key: var("OPENAI_API_KEY"),
            model: var("GPT_MODEL").unwrap_or(defaults.model),
            openai_base_url: var("OPENAI_BASE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.openai_base_url),
            upstream_timeout: var("UPSTREAM_TIMEOUT_SECS")
                .and_then(|v| v.parse::<u64>().ok())
                .filter(|&secs| secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.upstream_timeout),
            max_body_bytes: var("MAX_BODY_BYTES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_body_bytes),
            move_validation,
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
