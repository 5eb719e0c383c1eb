// src/services/admin.rs

//! Client for the admin create-college endpoint.

use futures::stream::{self, StreamExt};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Request body for the create-college endpoint.
///
/// The wire format is owned by the backend: camelCase keys, and absent
/// optional values are sent as explicit `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewSchool {
    pub name: String,
    pub city: String,
    pub country: String,
    pub state: String,
    pub website: Option<String>,
    pub ranking: Option<u32>,
    pub acceptance_rate: Option<f64>,
    pub description: Option<String>,
}

/// Error body returned by the endpoint on failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Summary of a bulk import run.
#[derive(Debug, Default)]
pub struct ImportOutcome {
    pub total: usize,
    pub failures: usize,
}

/// Client for the admin API.
pub struct AdminClient {
    client: Client,
    endpoint: String,
    max_concurrent: usize,
}

impl AdminClient {
    pub fn new(client: Client, endpoint: impl Into<String>, max_concurrent: usize) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            max_concurrent: max_concurrent.max(1),
        }
    }

    /// Create a single college record.
    ///
    /// Non-2xx responses are parsed for an `{"error": ...}` body; anything
    /// else surfaces the bare status.
    pub async fn create_school(&self, school: &NewSchool) -> Result<()> {
        let response = self.client.post(&self.endpoint).json(school).send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => format!("{} returned {}", self.endpoint, status),
        };
        Err(AppError::dispatch("admin_create", message))
    }

    /// Create many records with bounded concurrency.
    ///
    /// Failures are logged and counted, never aborting the rest of the
    /// batch.
    pub async fn import(&self, schools: &[NewSchool]) -> ImportOutcome {
        let mut outcome = ImportOutcome {
            total: schools.len(),
            ..ImportOutcome::default()
        };

        let mut results = stream::iter(schools)
            .map(|school| async move {
                let result = self.create_school(school).await;
                (school, result)
            })
            .buffer_unordered(self.max_concurrent);

        while let Some((school, result)) = results.next().await {
            if let Err(error) = result {
                outcome.failures += 1;
                log::warn!("Failed to import {}: {}", school.name, error);
            }
        }

        outcome
    }
}
