//! Axum route handlers for the Analysis API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::analysis::service::{analyze_tone_and_style, TextAnalysis};
use crate::errors::AppError;
use crate::language::{detect_language, language_name};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Missing is treated like empty and rejected.
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub detected_language: String,
    pub language_name: String,
    pub analysis: TextAnalysis,
}

/// POST /analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let Json(request) = payload?;

    if request.text.is_empty() {
        return Err(AppError::Validation("Text is required".to_string()));
    }

    let detected_language = detect_language(&request.text);
    let language_name = language_name(&detected_language)
        .unwrap_or("Unknown")
        .to_string();
    let analysis = analyze_tone_and_style(&state.ai, &request.text).await;

    Ok(Json(AnalyzeResponse {
        detected_language,
        language_name,
        analysis,
    }))
}
