//! Axum route handlers for the Translation API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::language::detect_language;
use crate::state::AppState;
use crate::translation::service::translate_creatively;

const DEFAULT_STYLE: &str = "neutral";
const SAME_LANGUAGE_MESSAGE: &str = "Source and target languages are the same";

#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub target_language: String,
    /// Auto-detected when absent or blank.
    #[serde(default)]
    pub source_language: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    /// Accepted for client compatibility; the prompt does not vary on it.
    #[serde(default = "default_preserve_formatting")]
    pub preserve_formatting: bool,
}

fn default_preserve_formatting() -> bool {
    true
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub original_text: String,
    pub translated_text: String,
    pub source_language: String,
    pub target_language: String,
    pub style: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// POST /translate
///
/// Translates text between languages with style preservation.
/// Short-circuits without any external call when source and target match.
pub async fn handle_translate(
    State(state): State<AppState>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Json<TranslateResponse>, AppError> {
    let Json(request) = payload?;

    if request.text.trim().is_empty() {
        return Err(AppError::Validation("Text is required".to_string()));
    }

    let source_language = request
        .source_language
        .filter(|code| !code.trim().is_empty())
        .unwrap_or_else(|| detect_language(&request.text));
    let style = request
        .style
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_STYLE.to_string());

    tracing::debug!(
        source = %source_language,
        target = %request.target_language,
        style = %style,
        preserve_formatting = request.preserve_formatting,
        "Translate request"
    );

    if source_language == request.target_language {
        return Ok(Json(TranslateResponse {
            translated_text: request.text.clone(),
            original_text: request.text,
            source_language,
            target_language: request.target_language,
            style,
            message: Some(SAME_LANGUAGE_MESSAGE.to_string()),
        }));
    }

    let translated_text = translate_creatively(
        &state.ai,
        state.fallback.as_ref(),
        &request.text,
        &request.target_language,
        &source_language,
        &style,
    )
    .await;

    Ok(Json(TranslateResponse {
        original_text: request.text,
        translated_text,
        source_language,
        target_language: request.target_language,
        style,
        message: None,
    }))
}
