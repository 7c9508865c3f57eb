//! Trigram-based language detection via `whatlang`.

use isolang::Language;
use whatlang::Lang;

/// Code returned whenever detection fails.
pub const FALLBACK_LANGUAGE: &str = "en";

/// Guesses below this confidence are treated as no detection. Very short
/// input ("Good morning", "Bonjour") scores well under it.
const MIN_CONFIDENCE: f64 = 0.05;

/// Returns the best-guess ISO 639-1 code for `text`.
///
/// Input that cannot be detected with enough confidence yields
/// `FALLBACK_LANGUAGE`, as does a detected language with no two-letter code.
pub fn detect_language(text: &str) -> String {
    let code = whatlang::detect(text)
        .filter(|info| info.confidence() >= MIN_CONFIDENCE)
        .and_then(|info| iso_code(info.lang()));

    match code {
        Some(code) => code.to_string(),
        None => {
            tracing::debug!("Language detection failed, defaulting to {FALLBACK_LANGUAGE}");
            FALLBACK_LANGUAGE.to_string()
        }
    }
}

/// Maps whatlang's ISO 639-3 code to ISO 639-1.
fn iso_code(lang: Lang) -> Option<&'static str> {
    match lang {
        // Mandarin has no two-letter code of its own; the catalog uses the macrolanguage.
        Lang::Cmn => Some("zh"),
        other => Language::from_639_3(other.code()).and_then(|l| l.to_639_1()),
    }
}
