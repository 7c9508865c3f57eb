pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers::handle_analyze;
use crate::creative::handlers::handle_creative;
use crate::language::handlers::{handle_creative_types, handle_languages, handle_styles};
use crate::state::AppState;
use crate::style::handlers::handle_transform_style;
use crate::translation::handlers::handle_translate;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Catalogs
        .route("/languages", get(handle_languages))
        .route("/styles", get(handle_styles))
        .route("/creative-types", get(handle_creative_types))
        // Text operations
        .route("/analyze", post(handle_analyze))
        .route("/translate", post(handle_translate))
        .route("/transform-style", post(handle_transform_style))
        .route("/creative", post(handle_creative))
        .with_state(state)
}
