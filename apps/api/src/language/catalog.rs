//! Immutable lookup tables shared by the prompt builders and the catalog endpoints.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Supported language codes and their English display names.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("zh", "Chinese"),
    ("ar", "Arabic"),
    ("hi", "Hindi"),
];

/// Style tags and the descriptions interpolated into prompts.
pub const STYLES: &[(&str, &str)] = &[
    ("formal", "Professional and formal tone"),
    ("casual", "Relaxed and informal tone"),
    ("academic", "Scholarly and precise language"),
    ("poetic", "Lyrical and metaphorical expression"),
    ("humorous", "Light-hearted and funny"),
    ("shakespearean", "Elizabethan English style"),
    ("modern_slang", "Contemporary informal language"),
    ("business", "Corporate and professional"),
    ("storytelling", "Narrative and engaging"),
    ("technical", "Precise and technical terminology"),
];

/// One entry of the `/creative-types` catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CreativeTypeEntry {
    pub value: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub const CREATIVE_TYPES: &[CreativeTypeEntry] = &[
    CreativeTypeEntry {
        value: "poem",
        label: "Poem",
        description: "Transform into poetic verse",
    },
    CreativeTypeEntry {
        value: "song",
        label: "Song Lyrics",
        description: "Create singable lyrics",
    },
    CreativeTypeEntry {
        value: "story",
        label: "Short Story",
        description: "Develop into narrative",
    },
    CreativeTypeEntry {
        value: "haiku",
        label: "Haiku",
        description: "Japanese 5-7-5 syllable poem",
    },
    CreativeTypeEntry {
        value: "limerick",
        label: "Limerick",
        description: "Humorous five-line poem",
    },
    CreativeTypeEntry {
        value: "sonnet",
        label: "Sonnet",
        description: "14-line poetic form",
    },
    CreativeTypeEntry {
        value: "rap",
        label: "Rap Verse",
        description: "Rhythmic spoken lyrics",
    },
    CreativeTypeEntry {
        value: "dialogue",
        label: "Dialogue",
        description: "Conversational format",
    },
];

/// A static code/name table serialized as a JSON object in declaration order.
#[derive(Debug, Clone, Copy)]
pub struct OrderedTable(pub &'static [(&'static str, &'static str)]);

impl Serialize for OrderedTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(code, _)| *code == key)
        .map(|(_, value)| *value)
}

pub fn language_name(code: &str) -> Option<&'static str> {
    lookup(LANGUAGES, code)
}

pub fn style_description(tag: &str) -> Option<&'static str> {
    lookup(STYLES, tag)
}

/// Display name for prompts: the catalog name when known, otherwise the raw code.
pub fn language_display(code: &str) -> &str {
    language_name(code).unwrap_or(code)
}

/// Style description for prompts: the catalog text when known, otherwise the raw tag.
pub fn style_display(tag: &str) -> &str {
    style_description(tag).unwrap_or(tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(LANGUAGES.len(), 12);
        assert_eq!(STYLES.len(), 10);
        assert_eq!(CREATIVE_TYPES.len(), 8);
    }

    #[test]
    fn test_catalog_keys_are_unique() {
        let codes: HashSet<_> = LANGUAGES.iter().map(|(c, _)| c).collect();
        assert_eq!(codes.len(), LANGUAGES.len());
        let tags: HashSet<_> = STYLES.iter().map(|(t, _)| t).collect();
        assert_eq!(tags.len(), STYLES.len());
        let values: HashSet<_> = CREATIVE_TYPES.iter().map(|e| e.value).collect();
        assert_eq!(values.len(), CREATIVE_TYPES.len());
    }

    #[test]
    fn test_unknown_codes_pass_through_for_prompts() {
        assert_eq!(language_display("es"), "Spanish");
        assert_eq!(language_display("sw"), "sw");
        assert_eq!(style_display("poetic"), "Lyrical and metaphorical expression");
        assert_eq!(style_display("pirate"), "pirate");
    }

    #[test]
    fn test_tables_serialize_in_catalog_order() {
        let languages = serde_json::to_string(&OrderedTable(LANGUAGES)).unwrap();
        assert!(languages.starts_with(r#"{"en":"English","es":"Spanish","fr":"French""#));
        assert!(languages.ends_with(r#""ar":"Arabic","hi":"Hindi"}"#));

        let styles = serde_json::to_string(&OrderedTable(STYLES)).unwrap();
        assert!(styles.starts_with(r#"{"formal":"Professional and formal tone","casual""#));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(language_name("EN"), None);
        assert_eq!(style_description("Formal"), None);
    }
}
