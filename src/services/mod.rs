// src/services/mod.rs

//! HTTP collaborator clients.
//!
//! - [`HttpAiSearch`]: AI-assisted search backend
//! - [`HttpLeadSink`]: lead submission with local fallback
//! - [`AdminClient`]: admin create-college endpoint

pub mod admin;
pub mod ai;
pub mod leads;

use std::time::Duration;

pub use admin::{AdminClient, ImportOutcome, NewSchool};
pub use ai::HttpAiSearch;
pub use leads::HttpLeadSink;

use crate::error::Result;
use crate::models::ClientConfig;

/// Create a configured asynchronous HTTP client.
pub fn create_client(config: &ClientConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}
