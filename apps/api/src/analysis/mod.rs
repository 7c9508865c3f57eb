// Text analysis: model-described tone and style, or a lexicon heuristic when
// the model is unavailable.

pub mod handlers;
pub mod prompts;
pub mod sentiment;
pub mod service;
