use serde::Serialize;
use tracing::warn;

use crate::analysis::prompts::build_analysis_prompt;
use crate::analysis::sentiment::polarity;
use crate::llm_client::AiClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Positive,
    Negative,
    Neutral,
}

impl Emotion {
    /// Only the sign of the polarity matters.
    pub fn from_polarity(score: f32) -> Self {
        if score > 0.0 {
            Emotion::Positive
        } else if score < 0.0 {
            Emotion::Negative
        } else {
            Emotion::Neutral
        }
    }
}

/// Fixed-field description produced without a model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeuristicAnalysis {
    pub tone: &'static str,
    pub style: &'static str,
    pub complexity: &'static str,
    pub emotion: Emotion,
    pub formality_level: u8,
    pub cultural_context: &'static str,
}

impl HeuristicAnalysis {
    pub fn from_text(text: &str) -> Self {
        Self {
            tone: "neutral",
            style: "general",
            complexity: "moderate",
            emotion: Emotion::from_polarity(polarity(text)),
            formality_level: 5,
            cultural_context: "general",
        }
    }
}

/// The `analysis` object of `/analyze`. Serialized without a tag so each
/// variant keeps its own flat shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TextAnalysis {
    /// Free-form model output, passed through unparsed.
    Model { analysis: String },
    Heuristic(HeuristicAnalysis),
    Failed { error: String },
}

/// Describes tone and style via the model, or the lexicon heuristic when disabled.
pub async fn analyze_tone_and_style(ai: &AiClient, text: &str) -> TextAnalysis {
    if !ai.is_enabled() {
        return TextAnalysis::Heuristic(HeuristicAnalysis::from_text(text));
    }

    match ai.generate(&build_analysis_prompt(text), None).await {
        Ok(analysis) => TextAnalysis::Model { analysis },
        Err(e) => {
            warn!("Text analysis failed: {e}");
            TextAnalysis::Failed {
                error: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::test_support::{client_for, spawn_mock_gemini, QUOTA_MODEL, WORKING_MODEL};
    use serde_json::json;

    #[test]
    fn test_emotion_from_polarity_sign() {
        assert_eq!(Emotion::from_polarity(0.3), Emotion::Positive);
        assert_eq!(Emotion::from_polarity(-0.01), Emotion::Negative);
        assert_eq!(Emotion::from_polarity(0.0), Emotion::Neutral);
    }

    #[tokio::test]
    async fn test_disabled_client_uses_heuristic_shape() {
        let analysis = analyze_tone_and_style(&AiClient::Disabled, "What a wonderful day").await;
        let value = serde_json::to_value(&analysis).unwrap();
        assert_eq!(
            value,
            json!({
                "tone": "neutral",
                "style": "general",
                "complexity": "moderate",
                "emotion": "positive",
                "formality_level": 5,
                "cultural_context": "general"
            })
        );
    }

    #[tokio::test]
    async fn test_model_output_is_wrapped() {
        let base = spawn_mock_gemini().await;
        let ai = AiClient::Enabled(client_for(&base, WORKING_MODEL));
        let value = serde_json::to_value(analyze_tone_and_style(&ai, "hi").await).unwrap();
        assert_eq!(value, json!({"analysis": "Hola mundo"}));
    }

    #[tokio::test]
    async fn test_model_failure_is_reported_as_error_field() {
        let base = spawn_mock_gemini().await;
        let ai = AiClient::Enabled(client_for(&base, QUOTA_MODEL));
        let value = serde_json::to_value(analyze_tone_and_style(&ai, "hi").await).unwrap();
        assert!(value["error"].as_str().unwrap().contains("quota"));
    }
}
