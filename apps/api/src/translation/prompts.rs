//! Prompt for style-preserving translation.

use crate::language::catalog::{language_display, style_display};
use crate::llm_client::prompts::{numbered_requirements, provide_only};

const TRANSLATOR_PERSONA: &str = "You are a master translator who specializes in creative \
    and nuanced translation that preserves the original meaning, tone, style, and cultural context.";

/// Builds the translation prompt. Unknown codes and tags are interpolated verbatim.
pub fn build_translation_prompt(text: &str, source: &str, target: &str, style: &str) -> String {
    let source_name = language_display(source);
    let target_name = language_display(target);
    let style_desc = style_display(style);

    let requirements = numbered_requirements(&[
        "Preserve the original meaning and emotional tone".to_string(),
        format!("Maintain the {style} style throughout"),
        format!("Use culturally appropriate expressions in {target_name}"),
        "Handle idioms and slang naturally".to_string(),
        "Keep the same level of formality".to_string(),
        "Preserve any wordplay or literary devices when possible".to_string(),
    ]);

    format!(
        "{TRANSLATOR_PERSONA}\n\n\
         Task: Translate the following {source_name} text to {target_name} while maintaining the {style_desc} style.\n\n\
         Original text: \"{text}\"\n\n\
         Requirements:\n{requirements}\n\n\
         {}",
        provide_only("the translation")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_uses_display_names_and_style_description() {
        let prompt = build_translation_prompt("Hello", "en", "es", "formal");
        assert!(prompt.contains(
            "Translate the following English text to Spanish while maintaining the Professional and formal tone style."
        ));
        assert!(prompt.contains("2. Maintain the formal style throughout"));
        assert!(prompt.contains("3. Use culturally appropriate expressions in Spanish"));
        assert!(prompt.contains("Original text: \"Hello\""));
        assert!(prompt.ends_with("Provide only the translation without explanations."));
    }

    #[test]
    fn test_prompt_has_six_requirements() {
        let prompt = build_translation_prompt("Hello", "en", "es", "neutral");
        assert!(prompt.contains("6. Preserve any wordplay or literary devices when possible"));
        assert!(!prompt.contains("7. "));
    }

    #[test]
    fn test_unknown_codes_are_echoed() {
        let prompt = build_translation_prompt("Hello", "xx", "sw", "pirate");
        assert!(prompt.contains("Translate the following xx text to sw while maintaining the pirate style."));
    }

    #[test]
    fn test_user_text_is_interpolated_verbatim() {
        let text = "He said \"hi\" {target}";
        let prompt = build_translation_prompt(text, "en", "fr", "casual");
        assert!(prompt.contains("Original text: \"He said \"hi\" {target}\""));
    }
}
