// src/models/lead.rs

//! Lead-capture form state and persisted lead records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Mutable state of the lead-capture form.
///
/// Mutated only by [`crate::forms::LeadForm`]; reset to empty immediately
/// after a successful submit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub message: String,
}

impl FormState {
    /// Names of required fields that are empty after trimming.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        if self.phone.trim().is_empty() {
            missing.push("phone");
        }
        missing
    }

    /// Reset all fields to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// A lead persisted to the local fallback queue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeadRecord {
    /// Deterministic id derived from the contact fields
    pub id: String,

    /// Captured form contents
    #[serde(flatten)]
    pub form: FormState,

    /// When the lead was captured
    pub captured_at: DateTime<Utc>,
}

impl LeadRecord {
    /// Create a record for a captured form, stamped with the current time.
    pub fn new(form: FormState) -> Self {
        let id = Self::canonical_id(&form);
        Self {
            id,
            form,
            captured_at: Utc::now(),
        }
    }

    /// Deterministic id: first 16 hex chars of sha256(email|phone|name).
    fn canonical_id(form: &FormState) -> String {
        let mut hasher = Sha256::new();
        hasher.update(form.email.trim().to_lowercase());
        hasher.update("|");
        hasher.update(form.phone.trim());
        hasher.update("|");
        hasher.update(form.name.trim());
        let digest = hasher.finalize();
        hex::encode(&digest[..8])
    }
}
