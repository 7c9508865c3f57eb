use crate::creative::kind::CreativeKind;
use crate::llm_client::prompts::{bullet_list, provide_only};

/// Builds the creative-content prompt. Type-specific bullets follow the generic header.
pub fn build_creative_prompt(
    text: &str,
    kind: &CreativeKind,
    theme: Option<&str>,
    mood: &str,
) -> String {
    let creative_type = kind.as_str();
    let theme_line = theme
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| format!("Theme: {t}\n"))
        .unwrap_or_default();

    let mut prompt = format!(
        "Transform the following text into a {creative_type} with a {mood} mood.\n\n\
         Original text: \"{text}\"\n\
         {theme_line}\n\
         Creative requirements for {creative_type}:\n"
    );

    let bullets = bullet_list(kind.requirements());
    if !bullets.is_empty() {
        prompt.push_str(&bullets);
        prompt.push('\n');
    }

    prompt.push_str(&format!("\nMood: {mood}\n{}", provide_only("the creative content")));
    prompt
}
