// src/catalog.rs

//! Static school catalog and its query helpers.
//!
//! The catalog is loaded once from JSON and is read-only afterwards. All
//! queries are pure: they borrow matching records and never reorder or
//! mutate the underlying list.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::School;

/// Read-only, in-memory school catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    schools: Vec<School>,
}

impl Catalog {
    /// Build a catalog from an already-loaded list.
    pub fn new(schools: Vec<School>) -> Self {
        Self { schools }
    }

    /// Load the catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let schools: Vec<School> = serde_json::from_str(&content)?;
        Ok(Self::new(schools))
    }

    pub fn len(&self) -> usize {
        self.schools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schools.is_empty()
    }

    /// Iterate over all records in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &School> {
        self.schools.iter()
    }

    /// Schools whose `region` exactly equals the argument (case-sensitive).
    pub fn by_region(&self, region: &str) -> Vec<&School> {
        self.schools.iter().filter(|s| s.region == region).collect()
    }

    /// Schools whose `country` exactly equals the argument (case-sensitive).
    pub fn by_country(&self, country: &str) -> Vec<&School> {
        self.schools
            .iter()
            .filter(|s| s.country == country)
            .collect()
    }

    /// The first `count` schools when sorted ascending by global rank.
    ///
    /// The sort is stable, so rank ties keep catalog order. A `count` larger
    /// than the catalog returns the whole sorted catalog; zero returns an
    /// empty list.
    pub fn top_n(&self, count: usize) -> Vec<&School> {
        let mut sorted: Vec<&School> = self.schools.iter().collect();
        sorted.sort_by_key(|s| s.ranking.global);
        sorted.truncate(count);
        sorted
    }

    /// Case-insensitive substring search over name, location, country, and
    /// specializations.
    ///
    /// Results keep catalog order; there is no relevance ranking. An empty
    /// query matches every record (substring-of-empty is always true) — this
    /// is intentional and relied on by callers that show the full catalog.
    pub fn search(&self, query: &str) -> Vec<&School> {
        let needle = query.to_lowercase();
        self.schools
            .iter()
            .filter(|s| {
                s.name.to_lowercase().contains(&needle)
                    || s.location.to_lowercase().contains(&needle)
                    || s.country.to_lowercase().contains(&needle)
                    || s.specializations
                        .iter()
                        .any(|spec| spec.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Ids that appear more than once, in first-occurrence order.
    ///
    /// The source data reuses ids across "top list" duplicates, so any
    /// id-keyed lookup must run this audit first.
    pub fn duplicate_ids(&self) -> Vec<u32> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();
        for school in &self.schools {
            if !seen.insert(school.id) && reported.insert(school.id) {
                duplicates.push(school.id);
            }
        }
        duplicates
    }
}
