// src/storage/local.rs

//! Local filesystem storage backend.
//!
//! Backs both the session slot and the lead fallback queue with JSON files
//! under a root directory:
//!
//! ```text
//! {root}/
//! ├── session.json          # Session slots: key -> serialized envelope
//! └── leads.json            # Fallback lead queue (append-only)
//! ```

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::models::LeadRecord;
use crate::storage::{LeadStore, SessionStore};

/// Local filesystem storage rooted at a data directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root_dir: PathBuf,
    session_file: String,
    leads_file: String,
}

impl LocalStorage {
    /// Create a storage with the default file names.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            session_file: "session.json".to_string(),
            leads_file: "leads.json".to_string(),
        }
    }

    /// Create a storage with custom file names (from [`crate::models::PathsConfig`]).
    pub fn with_files(
        root_dir: impl Into<PathBuf>,
        session_file: impl Into<String>,
        leads_file: impl Into<String>,
    ) -> Self {
        Self {
            root_dir: root_dir.into(),
            session_file: session_file.into(),
            leads_file: leads_file.into(),
        }
    }

    /// Get the full path for a relative key.
    fn path(&self, key: &str) -> PathBuf {
        self.root_dir.join(key)
    }

    /// Ensure parent directory exists.
    async fn ensure_dir(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        Ok(())
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path(key);
        self.ensure_dir(&path).await?;

        let tmp = path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }

    /// Read bytes, returning None if file doesn't exist.
    async fn read_bytes(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.path(key);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Io(e)),
        }
    }

    async fn read_sessions(&self) -> Result<HashMap<String, String>> {
        match self.read_bytes(&self.session_file).await? {
            Some(bytes) => Ok(serde_json::from_slice(&bytes)?),
            None => Ok(HashMap::new()),
        }
    }

    async fn read_leads(&self) -> Result<Vec<LeadRecord>> {
        match self.read_bytes(&self.leads_file).await? {
            Some(bytes) => Ok(serde_json::from_slice(&bytes)?),
            None => Ok(Vec::new()),
        }
    }
}

#[async_trait]
impl SessionStore for LocalStorage {
    async fn put(&self, key: &str, value: &str) -> Result<()> {
        let mut sessions = self.read_sessions().await?;
        sessions.insert(key.to_string(), value.to_string());
        let bytes = serde_json::to_vec_pretty(&sessions)?;
        self.write_bytes(&self.session_file, &bytes).await
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_sessions().await?.remove(key))
    }
}

#[async_trait]
impl LeadStore for LocalStorage {
    async fn append(&self, lead: &LeadRecord) -> Result<()> {
        let mut leads = self.read_leads().await?;
        leads.push(lead.clone());
        let bytes = serde_json::to_vec_pretty(&leads)?;
        self.write_bytes(&self.leads_file, &bytes).await
    }

    async fn load_all(&self) -> Result<Vec<LeadRecord>> {
        self.read_leads().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FormState;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_session_put_get() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());

        storage.put("ai_search_results", "{\"success\":true}").await.unwrap();
        let value = storage.get("ai_search_results").await.unwrap();
        assert_eq!(value.as_deref(), Some("{\"success\":true}"));
    }

    #[tokio::test]
    async fn test_session_overwrite_last_write_wins() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());

        storage.put("slot", "first").await.unwrap();
        storage.put("slot", "second").await.unwrap();
        assert_eq!(storage.get("slot").await.unwrap().as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn test_session_missing_key() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());
        assert!(storage.get("never-written").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_lead_queue_appends_in_order() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());

        let first = LeadRecord::new(FormState {
            name: "A".into(),
            email: "a@example.com".into(),
            phone: "1".into(),
            message: String::new(),
        });
        let second = LeadRecord::new(FormState {
            name: "B".into(),
            email: "b@example.com".into(),
            phone: "2".into(),
            message: String::new(),
        });

        storage.append(&first).await.unwrap();
        storage.append(&second).await.unwrap();

        let loaded = storage.load_all().await.unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].form.name, "A");
        assert_eq!(loaded[1].form.name, "B");
    }
}
