//! Translation pipeline: prompt the model, fall back to machine translation.

use std::fmt::Display;

use tracing::{info, warn};

use crate::llm_client::{AiClient, LlmError, WARNING_MARKER};
use crate::translation::fallback::FallbackTranslator;
use crate::translation::prompts::build_translation_prompt;

/// Prefix marking output that came from the fallback after a model failure.
pub const FALLBACK_PREFIX: &str = "[Google Translate]";

/// Translates `text`, never failing: every error becomes part of the returned string.
///
/// - AI enabled and answering: the model output.
/// - AI disabled: the fallback output, unprefixed.
/// - AI failed: the fallback output prefixed with `FALLBACK_PREFIX`.
/// - Both failed: a warning embedding both error texts.
pub async fn translate_creatively(
    ai: &AiClient,
    fallback: &dyn FallbackTranslator,
    text: &str,
    target: &str,
    source: &str,
    style: &str,
) -> String {
    let ai_error = if ai.is_enabled() {
        let prompt = build_translation_prompt(text, source, target, style);
        match ai.generate(&prompt, None).await {
            Ok(translated) => return translated,
            Err(e) => {
                warn!("Gemini translation failed: {e}, trying Google Translate fallback");
                e
            }
        }
    } else {
        info!("Using Google Translate fallback for translation");
        LlmError::Disabled
    };

    let prefix_result = !matches!(ai_error, LlmError::Disabled);

    match fallback.translate(text, source, target).await {
        Ok(result) if prefix_result => format!("{FALLBACK_PREFIX} {result}"),
        Ok(result) => result,
        Err(fallback_error) => {
            warn!("Fallback translation failed: {fallback_error}");
            dual_failure_message(&ai_error, &fallback_error)
        }
    }
}

fn dual_failure_message(ai_error: &impl Display, fallback_error: &impl Display) -> String {
    format!("{WARNING_MARKER} Translation failed: {ai_error}. Fallback also failed: {fallback_error}")
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use crate::translation::fallback::{FallbackTranslator, TranslateError};

    /// Echoes its inputs as `"<source>-><target>: <text>"` and counts calls.
    #[derive(Default)]
    pub struct EchoTranslator {
        pub calls: AtomicUsize,
    }

    #[async_trait]
    impl FallbackTranslator for EchoTranslator {
        async fn translate(
            &self,
            text: &str,
            source: &str,
            target: &str,
        ) -> Result<String, TranslateError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(format!("{source}->{target}: {text}"))
        }
    }

    /// Always fails with a 503 status.
    #[derive(Default)]
    pub struct FailingTranslator {
        pub calls: AtomicUsize,
    }

    #[async_trait]
    impl FallbackTranslator for FailingTranslator {
        async fn translate(
            &self,
            _text: &str,
            _source: &str,
            _target: &str,
        ) -> Result<String, TranslateError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(TranslateError::Status(503))
        }
    }
}
