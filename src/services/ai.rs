// src/services/ai.rs

//! HTTP client for the AI-assisted search backend.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use crate::error::{AppError, Result};
use crate::search::{AiSearch, SearchEnvelope};

/// Reqwest-backed [`AiSearch`] implementation.
///
/// One POST per query, no retry; failures are handled by the dispatcher's
/// fallback path.
pub struct HttpAiSearch {
    client: Client,
    endpoint: String,
}

impl HttpAiSearch {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl AiSearch for HttpAiSearch {
    async fn search(&self, query: &str) -> Result<SearchEnvelope> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&json!({ "query": query }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::dispatch(
                "ai_search",
                format!("{} returned {}", self.endpoint, status),
            ));
        }

        let envelope: SearchEnvelope = response.json().await?;
        Ok(envelope)
    }
}
