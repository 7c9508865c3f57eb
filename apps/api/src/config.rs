use anyhow::{Context, Result};
use secrecy::SecretString;

const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_FALLBACK_TRANSLATE_URL: &str = "https://translate.googleapis.com/translate_a/single";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Models probed at startup, in order of preference.
pub const DEFAULT_GEMINI_MODELS: &[&str] = &[
    "gemini-1.5-flash",
    "gemini-1.5-pro",
    "gemini-pro",
    "gemini-1.0-pro",
];

/// Application configuration loaded from environment variables.
/// Only `PORT` can fail startup; a missing API key just disables the AI paths.
#[derive(Debug)]
pub struct Config {
    pub google_api_key: Option<SecretString>,
    pub gemini_base_url: String,
    pub gemini_models: Vec<String>,
    pub fallback_translate_url: String,
    pub cors_allowed_origin: String,
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            google_api_key: optional_env("GOOGLE_API_KEY").map(SecretString::from),
            gemini_base_url: optional_env("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            gemini_models: optional_env("GEMINI_MODELS")
                .map(|raw| parse_model_list(&raw))
                .filter(|models| !models.is_empty())
                .unwrap_or_else(default_models),
            fallback_translate_url: optional_env("FALLBACK_TRANSLATE_URL")
                .unwrap_or_else(|| DEFAULT_FALLBACK_TRANSLATE_URL.to_string()),
            cors_allowed_origin: optional_env("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string()),
            host: optional_env("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Configuration with no API key and default endpoints. Used by tests.
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Config {
            google_api_key: None,
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            gemini_models: default_models(),
            fallback_translate_url: DEFAULT_FALLBACK_TRANSLATE_URL.to_string(),
            cors_allowed_origin: DEFAULT_CORS_ORIGIN.to_string(),
            host: "127.0.0.1".to_string(),
            port: 8000,
            rust_log: "info".to_string(),
        }
    }
}

/// Treats unset and blank variables the same way.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn default_models() -> Vec<String> {
    DEFAULT_GEMINI_MODELS.iter().map(|m| m.to_string()).collect()
}

fn parse_model_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .collect()
}
