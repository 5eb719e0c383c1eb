// src/models/config.rs

//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::{SuggestionEntry, SuggestionKind};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP client settings
    #[serde(default)]
    pub client: ClientConfig,

    /// Remote collaborator endpoints
    #[serde(default)]
    pub endpoints: EndpointsConfig,

    /// Search and suggestion settings
    #[serde(default)]
    pub search: SearchConfig,

    /// Lead-capture form settings
    #[serde(default)]
    pub forms: FormsConfig,

    /// File locations
    #[serde(default)]
    pub paths: PathsConfig,

    /// Fixed suggestion table used for local search fallback
    #[serde(default = "defaults::suggestions")]
    pub suggestions: Vec<SuggestionEntry>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.client.user_agent.trim().is_empty() {
            return Err(AppError::validation("client.user_agent is empty"));
        }
        if self.client.timeout_secs == 0 {
            return Err(AppError::validation("client.timeout_secs must be > 0"));
        }
        if self.search.max_suggestions == 0 {
            return Err(AppError::validation("search.max_suggestions must be > 0"));
        }
        if self.search.session_key.trim().is_empty() {
            return Err(AppError::validation("search.session_key is empty"));
        }
        if self.forms.success_banner_secs == 0 {
            return Err(AppError::validation("forms.success_banner_secs must be > 0"));
        }
        if self.suggestions.is_empty() {
            return Err(AppError::validation("No suggestions defined"));
        }
        for endpoint in [
            &self.endpoints.ai_search_url,
            &self.endpoints.leads_url,
            &self.endpoints.admin_url,
        ] {
            url::Url::parse(endpoint)
                .map_err(|e| AppError::validation(format!("Bad endpoint URL {endpoint}: {e}")))?;
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            endpoints: EndpointsConfig::default(),
            search: SearchConfig::default(),
            forms: FormsConfig::default(),
            paths: PathsConfig::default(),
            suggestions: defaults::suggestions(),
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Maximum concurrent requests for bulk operations
    #[serde(default = "defaults::max_concurrent")]
    pub max_concurrent: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            max_concurrent: defaults::max_concurrent(),
        }
    }
}

/// Remote collaborator endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointsConfig {
    /// AI-assisted search endpoint
    #[serde(default = "defaults::ai_search_url")]
    pub ai_search_url: String,

    /// Lead-submission endpoint
    #[serde(default = "defaults::leads_url")]
    pub leads_url: String,

    /// Admin create-college endpoint
    #[serde(default = "defaults::admin_url")]
    pub admin_url: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            ai_search_url: defaults::ai_search_url(),
            leads_url: defaults::leads_url(),
            admin_url: defaults::admin_url(),
        }
    }
}

/// Search and suggestion settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Cap on the suggestion list length
    #[serde(default = "defaults::max_suggestions")]
    pub max_suggestions: usize,

    /// Fixed session-slot key for persisted AI results
    #[serde(default = "defaults::session_key")]
    pub session_key: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_suggestions: defaults::max_suggestions(),
            session_key: defaults::session_key(),
        }
    }
}

/// Lead-capture form settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormsConfig {
    /// How long the post-submit success banner stays visible, in seconds
    #[serde(default = "defaults::success_banner_secs")]
    pub success_banner_secs: u64,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            success_banner_secs: defaults::success_banner_secs(),
        }
    }
}

/// File locations, relative to the data directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Static school catalog JSON
    #[serde(default = "defaults::catalog_file")]
    pub catalog_file: String,

    /// Session slot for the most recent AI search envelope
    #[serde(default = "defaults::session_file")]
    pub session_file: String,

    /// Fallback queue for leads that failed remote submission
    #[serde(default = "defaults::leads_file")]
    pub leads_file: String,

    /// Environment file checked by preflight ("" disables the check)
    #[serde(default = "defaults::env_file")]
    pub env_file: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            catalog_file: defaults::catalog_file(),
            session_file: defaults::session_file(),
            leads_file: defaults::leads_file(),
            env_file: defaults::env_file(),
        }
    }
}

impl PathsConfig {
    /// Resolve the catalog file against a base directory.
    pub fn catalog_path(&self, base: &Path) -> PathBuf {
        base.join(&self.catalog_file)
    }
}

mod defaults {
    use super::{SuggestionEntry, SuggestionKind};

    // Client defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; bscout/1.0)".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn max_concurrent() -> usize {
        5
    }

    // Endpoint defaults
    pub fn ai_search_url() -> String {
        "http://localhost:3000/api/ai-search".into()
    }
    pub fn leads_url() -> String {
        "http://localhost:3000/api/leads".into()
    }
    pub fn admin_url() -> String {
        "http://localhost:3000/api/admin/colleges".into()
    }

    // Search defaults
    pub fn max_suggestions() -> usize {
        8
    }
    pub fn session_key() -> String {
        "ai_search_results".into()
    }

    // Form defaults
    pub fn success_banner_secs() -> u64 {
        3
    }

    // Path defaults
    pub fn catalog_file() -> String {
        "schools.json".into()
    }
    pub fn session_file() -> String {
        "session.json".into()
    }
    pub fn leads_file() -> String {
        "leads.json".into()
    }
    pub fn env_file() -> String {
        ".env".into()
    }

    // Suggestion table defaults
    pub fn suggestions() -> Vec<SuggestionEntry> {
        vec![
            SuggestionEntry::with_auto_keywords(SuggestionKind::University, "Harvard Business School")
                .in_country("USA")
                .with_programs(12),
            SuggestionEntry::with_auto_keywords(SuggestionKind::University, "Stanford Graduate School of Business")
                .in_country("USA")
                .with_programs(9),
            SuggestionEntry::with_auto_keywords(SuggestionKind::University, "INSEAD")
                .in_country("France")
                .with_programs(7),
            SuggestionEntry::with_auto_keywords(SuggestionKind::University, "London Business School")
                .in_country("UK")
                .with_programs(10),
            SuggestionEntry::with_auto_keywords(SuggestionKind::University, "Wharton School")
                .in_country("USA")
                .with_programs(11),
            SuggestionEntry::with_auto_keywords(SuggestionKind::Course, "MBA").with_universities(120),
            SuggestionEntry::with_auto_keywords(SuggestionKind::Course, "Executive MBA")
                .with_universities(64),
            SuggestionEntry::with_auto_keywords(SuggestionKind::Course, "Computer Science")
                .with_universities(85),
            SuggestionEntry::with_auto_keywords(SuggestionKind::Course, "Finance").with_universities(92),
            SuggestionEntry::with_auto_keywords(SuggestionKind::Country, "USA").with_universities(210),
            SuggestionEntry::with_auto_keywords(SuggestionKind::Country, "UK").with_universities(98),
            SuggestionEntry::with_auto_keywords(SuggestionKind::Country, "France").with_universities(41),
            SuggestionEntry::with_auto_keywords(SuggestionKind::Country, "Singapore")
                .with_universities(17),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.client.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_suggestion_cap() {
        let mut config = Config::default();
        config.search.max_suggestions = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_endpoint() {
        let mut config = Config::default();
        config.endpoints.ai_search_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn default_suggestion_table_is_nonempty() {
        let config = Config::default();
        assert!(!config.suggestions.is_empty());
        assert!(
            config
                .suggestions
                .iter()
                .any(|s| s.kind == SuggestionKind::Course && s.name == "Computer Science")
        );
    }
}
