use tracing::warn;

use crate::creative::kind::CreativeKind;
use crate::creative::prompts::build_creative_prompt;
use crate::llm_client::prompts::MAX_OUTPUT_TOKENS;
use crate::llm_client::{AiClient, AiFailureKind, GenerationParams, LlmError};

/// Sampling temperature when the client does not send a creativity level.
pub const DEFAULT_CREATIVE_TEMPERATURE: f64 = 0.8;

pub const AI_UNAVAILABLE: &str =
    "⚠️ AI service not available for creative content generation. Please check your Google API key.";
const MODEL_UNAVAILABLE: &str = "⚠️ Gemini model not available. Please try again in a few moments.";
const QUOTA_EXCEEDED: &str = "⚠️ API quota exceeded. Please check your Google AI Studio usage limits.";

/// Generates creative content from `text`. Failures come back as warning strings.
pub async fn create_creative_content(
    ai: &AiClient,
    text: &str,
    kind: &CreativeKind,
    theme: Option<&str>,
    mood: &str,
    creativity: Option<f64>,
) -> String {
    if !ai.is_enabled() {
        return AI_UNAVAILABLE.to_string();
    }

    let prompt = build_creative_prompt(text, kind, theme, mood);
    let temperature = creativity.unwrap_or(DEFAULT_CREATIVE_TEMPERATURE);

    match ai
        .generate(&prompt, Some(GenerationParams::new(temperature, MAX_OUTPUT_TOKENS)))
        .await
    {
        Ok(content) => content,
        Err(e) => {
            warn!("Creative content generation failed: {e}");
            failure_message(&e)
        }
    }
}

/// Key/auth failures have no dedicated message on this path.
fn failure_message(error: &LlmError) -> String {
    match error.kind() {
        AiFailureKind::ModelNotFound => MODEL_UNAVAILABLE.to_string(),
        AiFailureKind::QuotaExceeded => QUOTA_EXCEEDED.to_string(),
        AiFailureKind::InvalidKey | AiFailureKind::Generic => {
            format!("⚠️ Creative content error: {error}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::test_support::{
        client_for, spawn_mock_gemini, ECHO_MODEL, PROMPT_ECHO_MODEL,
    };
    use crate::llm_client::WARNING_MARKER;

    #[tokio::test]
    async fn test_disabled_client_returns_warning() {
        let out = create_creative_content(
            &AiClient::Disabled,
            "hi",
            &CreativeKind::Poem,
            None,
            "neutral",
            None,
        )
        .await;
        assert_eq!(out, AI_UNAVAILABLE);
        assert!(out.starts_with(WARNING_MARKER));
    }

    #[test]
    fn test_auth_errors_fall_into_generic_message() {
        let err = LlmError::Api {
            status: 401,
            message: "bad key".to_string(),
        };
        assert_eq!(failure_message(&err), "⚠️ Creative content error: 401 bad key");
    }

    #[test]
    fn test_not_found_message() {
        let err = LlmError::Api {
            status: 404,
            message: "models/x is not found".to_string(),
        };
        assert_eq!(failure_message(&err), MODEL_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_default_temperature_is_point_eight() {
        let base = spawn_mock_gemini().await;
        let ai = AiClient::Enabled(client_for(&base, ECHO_MODEL));
        let out =
            create_creative_content(&ai, "hi", &CreativeKind::Song, None, "happy", None).await;
        assert!(out.contains("\"temperature\":0.8"));
    }

    #[tokio::test]
    async fn test_prompt_reaches_model_with_type_bullets() {
        let base = spawn_mock_gemini().await;
        let ai = AiClient::Enabled(client_for(&base, PROMPT_ECHO_MODEL));
        let out = create_creative_content(
            &ai,
            "autumn leaves",
            &CreativeKind::Limerick,
            Some("seasons"),
            "playful",
            Some(0.9),
        )
        .await;
        assert!(out.contains("into a limerick with a playful mood"));
        assert!(out.contains("- Follow AABBA rhyme scheme"));
        assert!(out.contains("Theme: seasons"));
    }
}
