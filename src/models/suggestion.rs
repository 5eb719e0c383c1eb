// src/models/suggestion.rs

//! Suggestion table entries for local (non-AI) search fallback.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// What kind of entity a suggestion points at.
///
/// Closed set; the dispatcher routes by this tag when the AI backend is
/// unavailable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    University,
    Course,
    Country,
}

/// One entry in the fixed suggestion table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuggestionEntry {
    /// Entity kind, drives fallback routing
    pub kind: SuggestionKind,

    /// Display name
    pub name: String,

    /// Lowercase tokens matched against raw user input
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Country of a university entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Program count shown next to university entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub programs_count: Option<u32>,

    /// University count shown next to course/country entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub universities_count: Option<u32>,
}

impl SuggestionEntry {
    /// Create an entry with keywords derived from the name.
    ///
    /// The name is lowercased and split into unicode words, and the full
    /// lowercased name is kept as a keyword as well so multi-word input
    /// still matches.
    pub fn with_auto_keywords(kind: SuggestionKind, name: impl Into<String>) -> Self {
        let name = name.into();
        let lowered = name.to_lowercase();
        let mut keywords: Vec<String> = lowered.unicode_words().map(String::from).collect();
        keywords.push(lowered);
        Self {
            kind,
            name,
            keywords,
            country: None,
            programs_count: None,
            universities_count: None,
        }
    }

    /// Attach a country label.
    pub fn in_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Attach a program count.
    pub fn with_programs(mut self, count: u32) -> Self {
        self.programs_count = Some(count);
        self
    }

    /// Attach a university count.
    pub fn with_universities(mut self, count: u32) -> Self {
        self.universities_count = Some(count);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_keywords_tokenize_name() {
        let entry =
            SuggestionEntry::with_auto_keywords(SuggestionKind::Course, "Computer Science");
        assert!(entry.keywords.contains(&"computer".to_string()));
        assert!(entry.keywords.contains(&"science".to_string()));
        assert!(entry.keywords.contains(&"computer science".to_string()));
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&SuggestionKind::University).unwrap();
        assert_eq!(json, "\"university\"");
    }
}
