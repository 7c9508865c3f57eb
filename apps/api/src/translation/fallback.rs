//! Secondary translator used when the AI client is disabled or a model call fails.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Translation service returned status {0}")]
    Status(u16),

    #[error("Invalid translation response format: {0}")]
    Format(String),

    #[error("Empty translation received")]
    Empty,
}

/// Pluggable machine translator. Default: `GoogleTranslator`.
#[async_trait]
pub trait FallbackTranslator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslateError>;
}

/// Client for the public Google Translate `translate_a/single` endpoint.
pub struct GoogleTranslator {
    client: Client,
    endpoint: String,
}

impl GoogleTranslator {
    pub fn new(endpoint: &str) -> Result<Self, TranslateError> {
        Ok(Self {
            client: Client::builder().build()?,
            endpoint: endpoint.to_string(),
        })
    }
}

#[async_trait]
impl FallbackTranslator for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslateError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .header(
                "User-Agent",
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
            )
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslateError::Status(status.as_u16()));
        }

        let body: Value = response.json().await?;
        let translation = join_segments(&body)?;

        debug!("Fallback translated {} chars {source}->{target}", text.len());

        Ok(translation)
    }
}

/// Google splits long input into segments; the translation of each sits at `[0][i][0]`.
fn join_segments(body: &Value) -> Result<String, TranslateError> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslateError::Format("missing segment array".to_string()))?;

    let translation: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translation.is_empty() {
        return Err(TranslateError::Empty);
    }

    Ok(translation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use axum::{extract::Query, routing::get, Json, Router};
    use serde_json::json;

    #[test]
    fn test_join_segments_concatenates_in_order() {
        let body = json!([[["Hola ", "Hello ", null, null, 1], ["mundo", "world", null, null, 1]], null, "en"]);
        assert_eq!(join_segments(&body).unwrap(), "Hola mundo");
    }

    #[test]
    fn test_join_segments_rejects_malformed_body() {
        let err = join_segments(&json!({"unexpected": true})).unwrap_err();
        assert!(matches!(err, TranslateError::Format(_)));
    }

    #[test]
    fn test_join_segments_rejects_empty_translation() {
        let err = join_segments(&json!([[], null, "en"])).unwrap_err();
        assert!(matches!(err, TranslateError::Empty));
    }

    async fn mock_translate(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
        let sl = params.get("sl").cloned().unwrap_or_default();
        let tl = params.get("tl").cloned().unwrap_or_default();
        let q = params.get("q").cloned().unwrap_or_default();
        Json(json!([[[format!("{sl}->{tl}:"), null], [q, null]], null, sl]))
    }

    #[tokio::test]
    async fn test_google_translator_sends_codes_and_encoded_text() {
        let app = Router::new().route("/translate_a/single", get(mock_translate));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let translator =
            GoogleTranslator::new(&format!("http://{addr}/translate_a/single")).unwrap();
        let result = translator
            .translate("Hello & goodbye?", "en", "es")
            .await
            .unwrap();
        assert_eq!(result, "en->es:Hello & goodbye?");
    }

    #[tokio::test]
    async fn test_google_translator_reports_unreachable_service() {
        // Port 9 (discard) is not expected to serve HTTP locally.
        let translator = GoogleTranslator::new("http://127.0.0.1:9/translate_a/single").unwrap();
        let err = translator.translate("Hello", "en", "es").await.unwrap_err();
        assert!(matches!(err, TranslateError::Http(_)));
    }
}
