// src/services/leads.rs

//! Lead submission client with local fallback.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::Result;
use crate::forms::LeadSink;
use crate::models::{FormState, LeadRecord};
use crate::storage::LeadStore;

/// Reqwest-backed [`LeadSink`].
///
/// On any transport or status failure the lead is appended to the local
/// fallback queue instead and the submission reports `remote_ok = false`.
/// `Err` is only returned when the fallback write itself fails.
pub struct HttpLeadSink {
    client: Client,
    endpoint: String,
    fallback: Arc<dyn LeadStore>,
}

impl HttpLeadSink {
    pub fn new(client: Client, endpoint: impl Into<String>, fallback: Arc<dyn LeadStore>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            fallback,
        }
    }

    async fn post_remote(&self, lead: &FormState) -> Result<()> {
        let response = self.client.post(&self.endpoint).json(lead).send().await?;
        response.error_for_status()?;
        Ok(())
    }
}

#[async_trait]
impl LeadSink for HttpLeadSink {
    async fn submit(&self, lead: &FormState) -> Result<bool> {
        match self.post_remote(lead).await {
            Ok(()) => Ok(true),
            Err(error) => {
                log::warn!("Remote lead submission failed: {error}, queueing locally");
                let record = LeadRecord::new(lead.clone());
                self.fallback.append(&record).await?;
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::LocalStorage;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_unreachable_remote_queues_locally() {
        let tmp = TempDir::new().unwrap();
        let storage = Arc::new(LocalStorage::new(tmp.path()));

        // Connection to a closed port fails fast.
        let sink = HttpLeadSink::new(
            Client::new(),
            "http://127.0.0.1:9/leads",
            Arc::clone(&storage) as Arc<dyn LeadStore>,
        );

        let lead = FormState {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            phone: "1".into(),
            message: String::new(),
        };

        let remote_ok = sink.submit(&lead).await.unwrap();
        assert!(!remote_ok);

        let queued = storage.load_all().await.unwrap();
        assert_eq!(queued.len(), 1);
        assert_eq!(queued[0].form, lead);
    }
}
