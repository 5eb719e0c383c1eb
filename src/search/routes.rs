// src/search/routes.rs

//! Client-side route values produced by the search dispatcher.

use std::fmt;

use url::form_urlencoded;

use crate::models::SuggestionKind;

/// A navigation target: a path plus url-encoded query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: String,
    pub params: Vec<(String, String)>,
}

impl Route {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: Vec::new(),
        }
    }

    /// Append a query parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// AI results page, flagged so the page reads the session slot.
    pub fn results(query: &str) -> Self {
        Self::new("/search/results")
            .param("q", query)
            .param("ai", "true")
    }

    /// University listing filtered by the query.
    pub fn universities(query: &str) -> Self {
        Self::new("/universities").param("search", query)
    }

    /// Course listing filtered by the query.
    pub fn courses(query: &str) -> Self {
        Self::new("/courses").param("search", query)
    }

    /// Country listing filtered by the query.
    pub fn countries(query: &str) -> Self {
        Self::new("/countries").param("search", query)
    }

    /// Generic listing used when nothing else matches.
    pub fn listing(query: &str) -> Self {
        Self::new("/colleges").param("search", query)
    }

    /// Kind-specific listing for a matched suggestion.
    pub fn for_kind(kind: SuggestionKind, query: &str) -> Self {
        match kind {
            SuggestionKind::University => Self::universities(query),
            SuggestionKind::Course => Self::courses(query),
            SuggestionKind::Country => Self::countries(query),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.params.is_empty() {
            return write!(f, "{}", self.path);
        }
        let query: String = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .finish();
        write!(f, "{}?{}", self.path, query)
    }
}
