// src/models/mod.rs

//! Domain models for the bscout application.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod lead;
mod school;
mod suggestion;

// Re-export all public types
pub use config::{
    ClientConfig, Config, EndpointsConfig, FormsConfig, PathsConfig, SearchConfig,
};
pub use lead::{FormState, LeadRecord};
pub use school::{Admissions, Outcomes, Program, Ranking, School, Stats};
pub use suggestion::{SuggestionEntry, SuggestionKind};
