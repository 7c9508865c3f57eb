//! Static catalog endpoints. These never touch external services.

use axum::Json;
use serde::Serialize;

use crate::language::catalog::{
    CreativeTypeEntry, OrderedTable, CREATIVE_TYPES, LANGUAGES, STYLES,
};

#[derive(Debug, Serialize)]
pub struct LanguagesResponse {
    pub languages: OrderedTable,
}

#[derive(Debug, Serialize)]
pub struct StylesResponse {
    pub styles: OrderedTable,
}

#[derive(Debug, Serialize)]
pub struct CreativeTypesResponse {
    pub creative_types: &'static [CreativeTypeEntry],
}

/// GET /languages
pub async fn handle_languages() -> Json<LanguagesResponse> {
    Json(LanguagesResponse {
        languages: OrderedTable(LANGUAGES),
    })
}

/// GET /styles
pub async fn handle_styles() -> Json<StylesResponse> {
    Json(StylesResponse {
        styles: OrderedTable(STYLES),
    })
}

/// GET /creative-types
pub async fn handle_creative_types() -> Json<CreativeTypesResponse> {
    Json(CreativeTypesResponse {
        creative_types: CREATIVE_TYPES,
    })
}
