//! Creative types with type-specific prompt requirements.

/// A requested creative form. Unrecognized tags are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreativeKind {
    Poem,
    Song,
    Story,
    Haiku,
    Rap,
    Limerick,
    Other(String),
}

impl CreativeKind {
    /// Exact, case-sensitive match on the wire tag.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "poem" => CreativeKind::Poem,
            "song" => CreativeKind::Song,
            "story" => CreativeKind::Story,
            "haiku" => CreativeKind::Haiku,
            "rap" => CreativeKind::Rap,
            "limerick" => CreativeKind::Limerick,
            other => CreativeKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CreativeKind::Poem => "poem",
            CreativeKind::Song => "song",
            CreativeKind::Story => "story",
            CreativeKind::Haiku => "haiku",
            CreativeKind::Rap => "rap",
            CreativeKind::Limerick => "limerick",
            CreativeKind::Other(tag) => tag,
        }
    }

    /// Form-specific instructions. `Other` (including catalog entries such as
    /// "sonnet" and "dialogue") gets none and relies on the generic header.
    pub fn requirements(&self) -> &'static [&'static str] {
        match self {
            CreativeKind::Poem => &[
                "Use poetic devices (metaphor, alliteration, rhythm)",
                "Create meaningful line breaks and stanzas",
                "Maintain emotional resonance",
                "Include vivid imagery",
            ],
            CreativeKind::Song => &[
                "Structure with verses and a chorus",
                "Use rhyme and rhythm suitable for music",
                "Include emotional hooks and repetition",
                "Make it singable and memorable",
            ],
            CreativeKind::Story => &[
                "Create a narrative arc with beginning, middle, end",
                "Develop characters and setting",
                "Use descriptive language and dialogue",
                "Build tension and resolution",
            ],
            CreativeKind::Haiku => &[
                "Follow 5-7-5 syllable pattern",
                "Focus on nature or moment in time",
                "Create a sense of tranquility or insight",
                "Use simple, evocative language",
            ],
            CreativeKind::Rap => &[
                "Use strong rhythm and rhyme schemes",
                "Include wordplay and clever lyrics",
                "Build flow and momentum",
                "Make it rhythmic and catchy",
            ],
            CreativeKind::Limerick => &[
                "Follow AABBA rhyme scheme",
                "Use humor and wit",
                "Keep it light and playful",
                "Follow traditional limerick meter",
            ],
            CreativeKind::Other(_) => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::catalog::CREATIVE_TYPES;

    #[test]
    fn test_known_tags_round_trip() {
        for tag in ["poem", "song", "story", "haiku", "rap", "limerick"] {
            let kind = CreativeKind::parse(tag);
            assert!(!matches!(kind, CreativeKind::Other(_)), "{tag} should be known");
            assert_eq!(kind.as_str(), tag);
            assert_eq!(kind.requirements().len(), 4);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(CreativeKind::parse("Poem"), CreativeKind::Other("Poem".to_string()));
    }

    #[test]
    fn test_catalog_only_types_have_no_requirements() {
        for tag in ["sonnet", "dialogue"] {
            assert!(CREATIVE_TYPES.iter().any(|e| e.value == tag));
            assert!(CreativeKind::parse(tag).requirements().is_empty());
        }
    }

    #[test]
    fn test_haiku_requirements_mention_syllables() {
        assert_eq!(
            CreativeKind::Haiku.requirements()[0],
            "Follow 5-7-5 syllable pattern"
        );
    }
}
