//! Gemini model configuration, loaded strictly from environment variables.
//!
//! # Environment variables
//!
//! - `GEMINI_API_KEY`      = API key (mandatory)
//! - `GEMINI_MODEL`        = model id (optional, default `gemini-2.0-flash`)
//! - `GEMINI_URL`          = API base (optional, default public endpoint)
//! - `GEMINI_TIMEOUT_SECS` = request timeout in seconds (optional, default 30)

use crate::error_handler::{AiGeminiError, env_opt_u64, must_env};

/// Default public API base for the Generative Language REST API.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Default model id used when `GEMINI_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Configuration for a Gemini `generateContent` invocation.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Model identifier string (e.g., `"gemini-2.0-flash"`).
    pub model: String,

    /// API base URL (scheme + host, no trailing path).
    pub endpoint: String,

    /// API key, sent via the `X-goog-api-key` header.
    pub api_key: Option<String>,

    /// Sampling temperature (controls creativity).
    pub temperature: Option<f32>,

    /// Nucleus sampling parameter.
    pub top_p: Option<f32>,

    /// Top-k sampling parameter.
    pub top_k: Option<u32>,

    /// Optional request timeout (in seconds).
    pub timeout_secs: Option<u64>,
}

impl GeminiConfig {
    /// Builds a config from the environment.
    ///
    /// Generation defaults are tuned for structured-JSON answers:
    /// `temperature = 0.25`, `top_p = 0.8`, `top_k = 40`, timeout 30s.
    ///
    /// # Errors
    /// [`crate::error_handler::ConfigError::MissingVar`] if `GEMINI_API_KEY`
    /// is absent or empty; `InvalidNumber` if `GEMINI_TIMEOUT_SECS` is set
    /// but not a `u64`.
    pub fn from_env() -> Result<Self, AiGeminiError> {
        let api_key = must_env("GEMINI_API_KEY")?;
        let model =
            std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let endpoint =
            std::env::var("GEMINI_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let timeout_secs = env_opt_u64("GEMINI_TIMEOUT_SECS")?.or(Some(30));

        Ok(Self {
            model,
            endpoint,
            api_key: Some(api_key),
            temperature: Some(0.25),
            top_p: Some(0.8),
            top_k: Some(40),
            timeout_secs,
        })
    }
}
