//! Axum route handlers for the Style API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;
use crate::style::service::transform_style;

#[derive(Debug, Deserialize)]
pub struct StyleTransformRequest {
    pub text: String,
    pub target_style: String,
    #[serde(default)]
    pub context: Option<String>,
    /// Used as the sampling temperature; not range-checked.
    #[serde(default = "default_creativity_level")]
    pub creativity_level: f64,
}

fn default_creativity_level() -> f64 {
    0.7
}

#[derive(Debug, Serialize)]
pub struct StyleTransformResponse {
    pub original_text: String,
    pub transformed_text: String,
    pub target_style: String,
    pub creativity_level: f64,
}

/// POST /transform-style
pub async fn handle_transform_style(
    State(state): State<AppState>,
    payload: Result<Json<StyleTransformRequest>, JsonRejection>,
) -> Result<Json<StyleTransformResponse>, AppError> {
    let Json(request) = payload?;

    if request.text.trim().is_empty() {
        return Err(AppError::Validation("Text is required".to_string()));
    }

    let transformed_text = transform_style(
        &state.ai,
        &request.text,
        &request.target_style,
        request.context.as_deref(),
        request.creativity_level,
    )
    .await;

    Ok(Json(StyleTransformResponse {
        original_text: request.text,
        transformed_text,
        target_style: request.target_style,
        creativity_level: request.creativity_level,
    }))
}
