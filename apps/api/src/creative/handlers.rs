//! Axum route handlers for the Creative API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::creative::kind::CreativeKind;
use crate::creative::service::create_creative_content;
use crate::errors::AppError;
use crate::state::AppState;

const DEFAULT_MOOD: &str = "neutral";

#[derive(Debug, Deserialize)]
pub struct CreativeRequest {
    pub text: String,
    /// poem, song, story, ... or any free-form tag.
    pub creative_type: String,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub creativity_level: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct CreativeResponse {
    pub original_text: String,
    pub creative_content: String,
    pub creative_type: String,
    pub theme: Option<String>,
    pub mood: String,
}

/// POST /creative
pub async fn handle_creative(
    State(state): State<AppState>,
    payload: Result<Json<CreativeRequest>, JsonRejection>,
) -> Result<Json<CreativeResponse>, AppError> {
    let Json(request) = payload?;

    if request.text.trim().is_empty() {
        return Err(AppError::Validation("Text is required".to_string()));
    }

    let mood = request
        .mood
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_MOOD.to_string());
    let kind = CreativeKind::parse(&request.creative_type);

    let creative_content = create_creative_content(
        &state.ai,
        &request.text,
        &kind,
        request.theme.as_deref(),
        &mood,
        request.creativity_level,
    )
    .await;

    Ok(Json(CreativeResponse {
        original_text: request.text,
        creative_content,
        creative_type: request.creative_type,
        theme: request.theme,
        mood,
    }))
}
