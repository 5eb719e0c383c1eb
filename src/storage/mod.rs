// src/storage/mod.rs

//! Storage abstractions for session and lead persistence.
//!
//! Two small concerns live here:
//! - **Session slot**: a single fixed key holding the most recent AI search
//!   envelope as serialized JSON. Overwritten on every successful dispatch,
//!   last-write-wins, no expiry beyond the session directory's lifetime.
//! - **Lead queue**: an append-only list of leads whose remote submission
//!   failed, kept so they can be replayed later.

pub mod local;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::LeadRecord;

// Re-export for convenience
pub use local::LocalStorage;

/// Session-scoped key/value slot for passing AI results between views.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Store a serialized value under the key, replacing any previous value.
    async fn put(&self, key: &str, value: &str) -> Result<()>;

    /// Read the value under the key, `None` when the slot was never written.
    async fn get(&self, key: &str) -> Result<Option<String>>;
}

/// Append-only fallback queue for leads.
#[async_trait]
pub trait LeadStore: Send + Sync {
    /// Append a lead to the queue.
    async fn append(&self, lead: &LeadRecord) -> Result<()>;

    /// Load all queued leads, oldest first.
    async fn load_all(&self) -> Result<Vec<LeadRecord>>;
}
