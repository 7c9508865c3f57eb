use tracing::warn;

use crate::llm_client::prompts::MAX_OUTPUT_TOKENS;
use crate::llm_client::{AiClient, AiFailureKind, GenerationParams, LlmError};
use crate::style::prompts::build_style_prompt;

pub const AI_UNAVAILABLE: &str =
    "⚠️ AI service not available. Please check your Google API key and internet connection.";
const MODEL_UNAVAILABLE: &str =
    "⚠️ Gemini model not available. The service may be updating. Please try again in a few moments.";
const QUOTA_EXCEEDED: &str = "⚠️ API quota exceeded. Please check your Google AI Studio usage limits.";
const INVALID_KEY: &str = "⚠️ Invalid API key. Please check your Google API key in the .env file.";

/// Rewrites `text` in `target_style`. Failures come back as warning strings, never errors.
/// `creativity` is passed straight through as the sampling temperature.
pub async fn transform_style(
    ai: &AiClient,
    text: &str,
    target_style: &str,
    context: Option<&str>,
    creativity: f64,
) -> String {
    if !ai.is_enabled() {
        return AI_UNAVAILABLE.to_string();
    }

    let prompt = build_style_prompt(text, target_style, context, creativity);
    let params = GenerationParams::new(creativity, MAX_OUTPUT_TOKENS);

    match ai.generate(&prompt, Some(params)).await {
        Ok(transformed) => transformed,
        Err(e) => {
            warn!("Style transformation failed: {e}");
            failure_message(&e)
        }
    }
}

fn failure_message(error: &LlmError) -> String {
    match error.kind() {
        AiFailureKind::ModelNotFound => MODEL_UNAVAILABLE.to_string(),
        AiFailureKind::QuotaExceeded => QUOTA_EXCEEDED.to_string(),
        AiFailureKind::InvalidKey => INVALID_KEY.to_string(),
        AiFailureKind::Generic => format!("⚠️ Style transformation error: {error}"),
    }
}
