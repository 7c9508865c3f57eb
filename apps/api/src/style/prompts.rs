//! Prompt for rewriting text in a target style.

use crate::language::catalog::style_display;
use crate::llm_client::prompts::{numbered_requirements, provide_only};

/// Builds the style-transform prompt. The context line is omitted when absent or blank.
pub fn build_style_prompt(
    text: &str,
    target_style: &str,
    context: Option<&str>,
    creativity: f64,
) -> String {
    let style_desc = style_display(target_style);
    let context_line = context
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(|c| format!("Context: {c}\n"))
        .unwrap_or_default();

    let requirements = numbered_requirements(&[
        "Preserve the core meaning and information".to_string(),
        format!("Adapt the tone and style to be {style_desc}"),
        "Use appropriate vocabulary and sentence structure".to_string(),
        "Maintain coherence and readability".to_string(),
        format!("Be creative but accurate (creativity level: {creativity})"),
    ]);

    format!(
        "Transform the following text to match the {target_style} style ({style_desc}).\n\n\
         Original text: \"{text}\"\n\
         {context_line}\n\
         Requirements:\n{requirements}\n\n\
         {}",
        provide_only("the transformed text")
    )
}
