mod analysis;
mod config;
mod creative;
mod errors;
mod language;
mod llm_client;
mod routes;
mod state;
mod style;
mod translation;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::errors::handle_panic;
use crate::llm_client::AiClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::translation::fallback::GoogleTranslator;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Creative Language Translator API v{}", env!("CARGO_PKG_VERSION"));

    // Probe Gemini once; the outcome is fixed for the process lifetime.
    let ai = AiClient::connect(&config).await;
    match ai.model() {
        Some(model) => info!("AI client enabled (model: {model})"),
        None => info!("AI client disabled; translation uses the fallback translator only"),
    }

    let fallback = GoogleTranslator::new(&config.fallback_translate_url)
        .context("Failed to build fallback translator")?;
    info!("Fallback translator initialized ({})", config.fallback_translate_url);

    let state = AppState {
        ai: Arc::new(ai),
        fallback: Arc::new(fallback),
    };

    let origin = config
        .cors_allowed_origin
        .parse::<HeaderValue>()
        .context("CORS_ALLOWED_ORIGIN must be a valid header value")?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = build_router(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("HOST and PORT must form a valid socket address")?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
