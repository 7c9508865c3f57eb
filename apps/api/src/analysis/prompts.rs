/// Analysis prompt template. Replace `{text}` before sending.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze the following text for tone, style, and characteristics:

Text: "{text}"

Please provide a JSON response with:
- tone: (formal/informal/neutral/emotional/etc.)
- style: (descriptive/narrative/persuasive/technical/etc.)
- complexity: (simple/moderate/complex)
- emotion: (positive/negative/neutral)
- formality_level: (1-10 scale)
- cultural_context: any cultural references or idioms"#;

pub fn build_analysis_prompt(text: &str) -> String {
    ANALYSIS_PROMPT_TEMPLATE.replace("{text}", text)
}
