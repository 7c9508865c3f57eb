// Shared prompt fragments and prompt-building utilities.
// Each service that needs model calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Sampling ceiling for the generative endpoints.
pub const MAX_OUTPUT_TOKENS: u32 = 1500;

/// Closing line appended to every rewriting prompt, e.g. "the translation".
pub fn provide_only(output: &str) -> String {
    format!("Provide only {output} without explanations.")
}

/// Renders a numbered requirements block, one item per line.
pub fn numbered_requirements(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {item}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders a bulleted list, one item per line.
pub fn bullet_list(items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_requirements_start_at_one() {
        let rendered = numbered_requirements(&["first".to_string(), "second".to_string()]);
        assert_eq!(rendered, "1. first\n2. second");
    }

    #[test]
    fn test_bullet_list_empty_is_empty() {
        assert_eq!(bullet_list(&[]), "");
        assert_eq!(bullet_list(&["a", "b"]), "- a\n- b");
    }

    #[test]
    fn test_provide_only_wording() {
        assert_eq!(
            provide_only("the translation"),
            "Provide only the translation without explanations."
        );
    }
}
