// src/search/matcher.rs

//! Local suggestion matching against the fixed suggestion table.

use crate::models::SuggestionEntry;

/// Hard cap on the suggestion list length.
pub const MAX_SUGGESTIONS: usize = 8;

/// Matches free-text input against the fixed suggestion table.
///
/// Matching is plain lowercase substring, no tokenization and no relevance
/// scoring. Matches keep table order.
#[derive(Debug, Clone)]
pub struct SuggestionMatcher {
    table: Vec<SuggestionEntry>,
    max_suggestions: usize,
}

impl SuggestionMatcher {
    /// Create a matcher over the given table with the default cap.
    pub fn new(table: Vec<SuggestionEntry>) -> Self {
        Self::with_cap(table, MAX_SUGGESTIONS)
    }

    /// Create a matcher with a custom result cap.
    pub fn with_cap(table: Vec<SuggestionEntry>, max_suggestions: usize) -> Self {
        Self {
            table,
            max_suggestions,
        }
    }

    /// Suggestions matching the input, capped at the configured maximum.
    ///
    /// An entry matches when the lowercased input is a substring of its
    /// lowercased name or of any keyword. Empty or whitespace-only input
    /// returns no suggestions: with substring-of-empty semantics it would
    /// match the whole table, which is never what a caller wants displayed.
    pub fn suggest(&self, input: &str) -> Vec<&SuggestionEntry> {
        let needle = input.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.table
            .iter()
            .filter(|entry| {
                entry.name.to_lowercase().contains(&needle)
                    || entry.keywords.iter().any(|kw| kw.contains(&needle))
            })
            .take(self.max_suggestions)
            .collect()
    }

    /// Case-insensitive whole-name lookup, used by the dispatch fallback.
    pub fn exact_match(&self, input: &str) -> Option<&SuggestionEntry> {
        let needle = input.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.table
            .iter()
            .find(|entry| entry.name.to_lowercase() == needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SuggestionKind;

    fn entry(kind: SuggestionKind, name: &str) -> SuggestionEntry {
        SuggestionEntry::with_auto_keywords(kind, name)
    }

    fn sample_matcher() -> SuggestionMatcher {
        SuggestionMatcher::new(vec![
            entry(SuggestionKind::University, "Harvard Business School"),
            entry(SuggestionKind::University, "Stanford Graduate School of Business"),
            entry(SuggestionKind::Course, "Computer Science"),
            entry(SuggestionKind::Course, "MBA"),
            entry(SuggestionKind::Country, "USA"),
        ])
    }

    #[test]
    fn test_name_substring_match_is_included() {
        let matcher = sample_matcher();
        let hits = matcher.suggest("harv");
        assert!(hits.iter().any(|e| e.name == "Harvard Business School"));
    }

    #[test]
    fn test_keyword_match() {
        let matcher = sample_matcher();
        // "science" is a derived keyword of "Computer Science".
        let hits = matcher.suggest("science");
        assert!(hits.iter().any(|e| e.name == "Computer Science"));
    }

    #[test]
    fn test_table_order_preserved() {
        let matcher = sample_matcher();
        // "s" matches several entries; order must follow the table.
        let names: Vec<&str> = matcher.suggest("s").iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Harvard Business School",
                "Stanford Graduate School of Business",
                "Computer Science",
                "USA"
            ]
        );
    }

    #[test]
    fn test_result_capped_at_eight() {
        let table: Vec<SuggestionEntry> = (0..20)
            .map(|i| entry(SuggestionKind::Course, &format!("Course {i}")))
            .collect();
        let matcher = SuggestionMatcher::new(table);
        assert_eq!(matcher.suggest("course").len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        let matcher = sample_matcher();
        assert!(matcher.suggest("").is_empty());
        assert!(matcher.suggest("   ").is_empty());
    }

    #[test]
    fn test_exact_match_ignores_case() {
        let matcher = sample_matcher();
        let hit = matcher.exact_match("computer science").unwrap();
        assert_eq!(hit.kind, SuggestionKind::Course);
        assert!(matcher.exact_match("computer").is_none());
    }
}
