// Rule-based label extraction for knife product titles
use crate::labeler::LabelExtractor;
use crate::utils::title_case;
use once_cell::sync::Lazy;
use regex::Regex;

/// Separates the product name from series/edition qualifiers.
const SEGMENT_SEPARATOR: &str = " - ";

static PIECE_COUNT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+-[Pp]iece").unwrap());
static SIZE_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^\d+(\.\d+)?"?\s*"#).unwrap());

/// Multi-word names that the first-word fallback would cut short.
/// Matched case-insensitively, first entry wins.
const OVERRIDES: &[(&str, &str)] = &[
    ("Cai Dao", "Cai Dao"),
    ("Butcher's Cleaver", "Butcher's"),
    ("Granton-Edge", "Granton"),
    ("Granton - Edge", "Granton"),
    ("Carving Fork", "Fork"),
];

const STRIPPED_WORDS: &[&str] = &[" Knife", " Set"];

pub struct ThumbnailLabeler;

impl ThumbnailLabeler {
    pub fn new() -> Self {
        Self
    }

    fn piece_count(name: &str) -> Option<String> {
        if !name.contains("-Piece") && !name.contains("-piece") {
            return None;
        }
        PIECE_COUNT.find(name).map(|m| title_case(m.as_str()))
    }

    fn known_override(name: &str) -> Option<&'static str> {
        let lowered = name.to_lowercase();
        OVERRIDES
            .iter()
            .find(|(pattern, _)| lowered.contains(&pattern.to_lowercase()))
            .map(|(_, label)| *label)
    }
}

impl Default for ThumbnailLabeler {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelExtractor for ThumbnailLabeler {
    fn extract(&self, title: &str) -> String {
        let Some(segment) = title.split(SEGMENT_SEPARATOR).next() else {
            return title.to_string();
        };
        let name = segment.trim();

        if let Some(label) = Self::piece_count(name) {
            return label;
        }

        let name = SIZE_PREFIX.replace(name, "");

        if let Some(label) = Self::known_override(&name) {
            return label.to_string();
        }

        // Removed anywhere in the name, not only at the end.
        let mut name = name.into_owned();
        for word in STRIPPED_WORDS {
            name = name.replace(word, "");
        }

        match name.split_whitespace().next() {
            Some(first) => first.trim().to_string(),
            None => name.trim().to_string(),
        }
    }
}
