use anyhow::{Context, Result};

use crate::llm_client::GROQ_API_URL;

/// Application configuration loaded from environment variables.
/// Nothing is strictly required: the Groq key may also arrive per request.
#[derive(Debug, Clone)]
pub struct Config {
    /// Process-wide credential, used only when a request supplies none.
    pub groq_api_key: Option<String>,
    pub groq_api_url: String,
    pub llm_timeout_secs: u64,
    pub static_dir: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        Ok(Config {
            groq_api_key: var("GROQ_API_KEY"),
            groq_api_url: var("GROQ_API_URL").unwrap_or_else(|| GROQ_API_URL.to_string()),
            llm_timeout_secs: var("LLM_TIMEOUT_SECS")
                .unwrap_or_else(|| "60".to_string())
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            static_dir: var("STATIC_DIR").unwrap_or_else(|| "public".to_string()),
            port: var("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
