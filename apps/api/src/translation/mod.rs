// Creative translation: AI-first, with a plain machine-translation fallback.
// All model calls go through llm_client; the fallback sits behind a trait so
// handlers never depend on a concrete translation service.

pub mod fallback;
pub mod handlers;
pub mod prompts;
pub mod service;
