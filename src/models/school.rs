// src/models/school.rs

//! Business-school record structures.

use serde::{Deserialize, Serialize};

/// A business-school record from the static catalog.
///
/// Records are immutable after load. Note that `id` is **not** guaranteed to
/// be unique across the catalog (the source data reuses ids for denormalized
/// display duplicates), so lookups must never assume an id-keyed map without
/// running [`crate::catalog::Catalog::duplicate_ids`] first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct School {
    /// Record identifier (positive, possibly reused)
    pub id: u32,

    /// Full display name
    pub name: String,

    /// Abbreviated name (e.g., "HBS")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,

    /// City / campus location
    pub location: String,

    /// Country name
    pub country: String,

    /// Region grouping (e.g., "North America", "Europe")
    pub region: String,

    /// Ranking group
    pub ranking: Ranking,

    /// Degree programs offered
    #[serde(default)]
    pub programs: Vec<Program>,

    /// Admission requirements, normalized to optional fields
    #[serde(default)]
    pub admissions: Admissions,

    /// Cohort statistics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<Stats>,

    /// Graduate outcomes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcomes: Option<Outcomes>,

    /// Marketing highlights
    #[serde(default)]
    pub highlights: Vec<String>,

    /// Program specializations (searchable)
    #[serde(default)]
    pub specializations: Vec<String>,

    /// Scholarship names
    #[serde(default)]
    pub scholarships: Vec<String>,

    /// Campus-life blurb
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campus_life: Option<String>,
}

/// Ranking positions for one school.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ranking {
    /// Global rank (1 = best)
    pub global: u32,

    /// Rank within the school's region
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regional: Option<u32>,

    /// Rank within the school's country
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national: Option<u32>,
}

/// A degree program offered by a school.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Program {
    /// Program name (e.g., "Full-time MBA")
    pub name: String,

    /// Duration (e.g., "2 years")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    /// Tuition, formatted (source data is not normalized to a currency)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tuition: Option<String>,
}

/// Admission requirements.
///
/// The source data is inconsistent about absent values (`null`, missing key,
/// or omitted group), so every field deserializes to `None` in all three
/// cases. Query logic must only ever see `Option<T>`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Admissions {
    /// Average GMAT score of admitted students
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_gmat: Option<u32>,

    /// Minimum work experience in years
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_work_experience_years: Option<u32>,

    /// Application deadline, formatted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,

    /// Acceptance rate in percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acceptance_rate: Option<f64>,
}

/// Cohort statistics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Stats {
    /// Enrolled class size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_size: Option<u32>,

    /// Share of international students in percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub international_pct: Option<f64>,

    /// Share of women in percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub women_pct: Option<f64>,
}

/// Graduate outcomes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Outcomes {
    /// Employment rate three months after graduation, percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employment_rate: Option<f64>,

    /// Median base salary, formatted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub median_salary: Option<String>,
}

impl School {
    /// Display label: short name when present, full name otherwise.
    pub fn label(&self) -> &str {
        self.short_name.as_deref().unwrap_or(&self.name)
    }
}
