// src/search/mod.rs

//! Search flow: suggestion matching, route construction, and dispatch.

pub mod dispatch;
pub mod matcher;
pub mod routes;

use serde::{Deserialize, Serialize};

pub use dispatch::{AiSearch, DispatchOutcome, Navigator, SearchDispatcher};
pub use matcher::{SuggestionMatcher, MAX_SUGGESTIONS};
pub use routes::Route;

/// Success/failure envelope returned by the AI-search collaborator.
///
/// Only the `success` flag is interpreted here; the payload is owned by the
/// remote service and persisted verbatim for the results page to consume.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchEnvelope {
    /// Whether the remote search produced usable results
    pub success: bool,

    /// Opaque remote payload, passed through untouched
    #[serde(flatten)]
    pub payload: serde_json::Value,
}
