use anyhow::{Context, Result};

/// Default generation model used when GEMINI_MODEL env var is not set
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default API base used when GEMINI_API_BASE env var is not set
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Application configuration from environment
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub model: String,
    pub api_base: String,
}

impl Config {
    /// Load configuration from .env file and environment
    ///
    /// Fails when GEMINI_API_KEY is missing; the server refuses to start
    /// without a credential rather than erroring on the first request.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Not an error if .env is absent

        let gemini_api_key = std::env::var("GEMINI_API_KEY").context("GEMINI_API_KEY not set")?;

        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let api_base =
            std::env::var("GEMINI_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        Ok(Self {
            gemini_api_key,
            model,
            api_base,
        })
    }
}
