//! LLM Client: the single point of entry for all Gemini API calls.
//!
//! ARCHITECTURAL RULE: No other module may call the Gemini API directly.
//! All model interactions MUST go through `AiClient`.
//!
//! The active model is chosen once at startup by probing a preference list;
//! the resulting `AiClient` is immutable for the rest of the process.

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::Config;

pub mod prompts;

/// Every user-facing AI warning starts with this marker.
pub const WARNING_MARKER: &str = "⚠️";

/// Prompt used to check that a model answers before committing to it.
const PROBE_PROMPT: &str = "Hello";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{status} {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("AI service not configured")]
    Disabled,
}

/// Coarse provider failure categories used to pick a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiFailureKind {
    ModelNotFound,
    QuotaExceeded,
    InvalidKey,
    Generic,
}

impl LlmError {
    /// Classifies the failure. HTTP status wins when the provider returned one;
    /// otherwise the rendered message is matched against known phrases.
    pub fn kind(&self) -> AiFailureKind {
        match self {
            LlmError::Api { status: 404, .. } => AiFailureKind::ModelNotFound,
            LlmError::Api { status: 429, .. } => AiFailureKind::QuotaExceeded,
            LlmError::Api {
                status: 401 | 403, ..
            } => AiFailureKind::InvalidKey,
            other => classify_message(&other.to_string()),
        }
    }
}

/// Substring heuristics for errors without a usable status code.
/// Order matters: "not found" beats "quota", which beats "key".
pub fn classify_message(message: &str) -> AiFailureKind {
    let lower = message.to_lowercase();
    if message.contains("404") || lower.contains("not found") {
        AiFailureKind::ModelNotFound
    } else if lower.contains("quota") || lower.contains("limit") {
        AiFailureKind::QuotaExceeded
    } else if lower.contains("key") || lower.contains("auth") {
        AiFailureKind::InvalidKey
    } else {
        AiFailureKind::Generic
    }
}

/// Optional sampling parameters, sent as `generationConfig`.
///
/// The temperature is forwarded unclamped at full precision; the provider
/// rejects values outside its range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

impl GenerationParams {
    pub fn new(temperature: f64, max_output_tokens: u32) -> Self {
        Self {
            temperature: Some(temperature),
            max_output_tokens: Some(max_output_tokens),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationParams>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenates the text parts of the first candidate.
    fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        (!text.trim().is_empty()).then_some(text)
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ModelList {
    #[serde(default)]
    models: Vec<ModelInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModelInfo {
    name: String,
    #[serde(default)]
    supported_generation_methods: Vec<String>,
}

/// Thin wrapper over the Gemini `generateContent` REST endpoint for one model.
pub struct GeminiClient {
    client: Client,
    api_key: SecretString,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(client: Client, api_key: SecretString, base_url: &str, model: &str) -> Self {
        Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends a single prompt and returns the generated text, trimmed.
    /// No retries: every failure is reported to the caller once.
    pub async fn generate(
        &self,
        prompt: &str,
        params: Option<GenerationParams>,
    ) -> Result<String, LlmError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let request_body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: params,
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;
        let text = parsed.text().ok_or(LlmError::EmptyContent)?;

        debug!(model = %self.model, chars = text.len(), "Gemini call succeeded");

        Ok(text.trim().to_string())
    }
}

/// Process-wide AI handle. Decided once at startup and never re-initialized.
pub enum AiClient {
    Enabled(GeminiClient),
    Disabled,
}

impl AiClient {
    /// Probes the configured models in order and keeps the first that answers.
    /// Falls back to `Disabled` when no key is set or every model fails.
    pub async fn connect(config: &Config) -> Self {
        let Some(api_key) = config.google_api_key.as_ref() else {
            warn!("No GOOGLE_API_KEY found in environment variables; AI features disabled");
            return AiClient::Disabled;
        };

        let http = match Client::builder().build() {
            Ok(http) => http,
            Err(e) => {
                warn!("Failed to build HTTP client for Gemini: {e}");
                return AiClient::Disabled;
            }
        };

        for model in &config.gemini_models {
            let candidate = GeminiClient::new(
                http.clone(),
                SecretString::from(api_key.expose_secret().to_string()),
                &config.gemini_base_url,
                model,
            );
            match candidate.generate(PROBE_PROMPT, None).await {
                Ok(_) => {
                    info!("Successfully initialized Gemini model: {model}");
                    return AiClient::Enabled(candidate);
                }
                Err(e) => warn!("Failed to initialize {model}: {e}"),
            }
        }

        warn!("No working Gemini model found; AI features disabled");
        log_available_models(&http, api_key, &config.gemini_base_url).await;
        AiClient::Disabled
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, AiClient::Enabled(_))
    }

    pub fn model(&self) -> Option<&str> {
        match self {
            AiClient::Enabled(client) => Some(client.model()),
            AiClient::Disabled => None,
        }
    }

    pub async fn generate(
        &self,
        prompt: &str,
        params: Option<GenerationParams>,
    ) -> Result<String, LlmError> {
        match self {
            AiClient::Enabled(client) => client.generate(prompt, params).await,
            AiClient::Disabled => Err(LlmError::Disabled),
        }
    }
}

/// Best-effort listing of models that support `generateContent`, to help
/// operators pick a working entry for `GEMINI_MODELS`.
async fn log_available_models(http: &Client, api_key: &SecretString, base_url: &str) {
    match fetch_model_list(http, api_key, base_url).await {
        Ok(list) => {
            let usable: Vec<&str> = list
                .models
                .iter()
                .filter(|m| {
                    m.supported_generation_methods
                        .iter()
                        .any(|method| method == "generateContent")
                })
                .map(|m| m.name.as_str())
                .collect();
            warn!("Available Gemini models: {}", usable.join(", "));
        }
        Err(e) => warn!("Could not list models: {e}"),
    }
}

async fn fetch_model_list(
    http: &Client,
    api_key: &SecretString,
    base_url: &str,
) -> Result<ModelList, reqwest::Error> {
    let url = format!("{}/models", base_url.trim_end_matches('/'));
    http.get(&url)
        .header("x-goog-api-key", api_key.expose_secret())
        .send()
        .await?
        .error_for_status()?
        .json::<ModelList>()
        .await
}
