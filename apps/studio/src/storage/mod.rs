//! Persistence port for the resume document.
//!
//! There is exactly one record, stored under [`RESUME_STORAGE_KEY`]. Every
//! save overwrites it wholesale (last writer wins). Loading is best-effort:
//! a missing or unreadable record is `None`, never an error. Only backend I/O
//! failures surface as [`StoreError`].

pub mod file;
pub mod memory;
pub mod record;
pub mod redis;

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::{Config, StoreBackend};
use crate::models::resume::ResumeDocument;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use record::{decode_record, encode_record};
pub use self::redis::RedisStore;

/// The fixed key the resume record lives under.
pub const RESUME_STORAGE_KEY: &str = "resumeData";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Redis error: {0}")]
    Redis(#[from] ::redis::RedisError),

    #[error("Failed to serialize resume record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Raw key-value access to the single stored record.
///
/// Backends only move text; encoding, migration and malformed-data handling
/// live in [`load`] and [`save`] so every backend behaves the same.
#[async_trait]
pub trait ResumeStore: Send + Sync {
    async fn read_raw(&self) -> Result<Option<String>, StoreError>;

    async fn write_raw(&self, raw: String) -> Result<(), StoreError>;

    /// Removes the record. Clearing an absent record is not an error.
    async fn clear(&self) -> Result<(), StoreError>;

    fn backend_name(&self) -> &'static str;
}

/// Loads the stored document. `Ok(None)` when nothing usable is stored.
pub async fn load(store: &dyn ResumeStore) -> Result<Option<ResumeDocument>, StoreError> {
    let Some(raw) = store.read_raw().await? else {
        debug!("No stored resume record in {} store", store.backend_name());
        return Ok(None);
    };
    Ok(decode_record(&raw))
}

/// Serializes the full document and overwrites the stored record.
pub async fn save(store: &dyn ResumeStore, doc: &ResumeDocument) -> Result<(), StoreError> {
    let raw = encode_record(doc)?;
    let len = raw.len();
    store.write_raw(raw).await?;
    debug!("Saved resume record ({len} bytes) to {} store", store.backend_name());
    Ok(())
}

/// Builds the store selected by configuration.
pub async fn build_store(config: &Config) -> Result<Arc<dyn ResumeStore>> {
    let store: Arc<dyn ResumeStore> = match config.store_backend {
        StoreBackend::File => {
            let store = FileStore::open(&config.store_dir)
                .await
                .with_context(|| format!("Failed to open store directory {:?}", config.store_dir))?;
            info!("Resume record path: {}", store.path().display());
            Arc::new(store)
        }
        StoreBackend::Redis => {
            let url = config
                .redis_url
                .as_deref()
                .context("REDIS_URL must be set when STORE_BACKEND=redis")?;
            Arc::new(RedisStore::new(url)?)
        }
        StoreBackend::Memory => Arc::new(MemoryStore::default()),
    };
    info!("Resume store initialized ({} backend)", store.backend_name());
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_absent_record_is_none() {
        let store = MemoryStore::default();
        assert_eq!(load(&store).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_load_after_save_returns_same_document() {
        let store = MemoryStore::default();
        let mut doc = ResumeDocument::default();
        doc.personal_info.full_name = "Jane Doe".to_string();
        doc.skills.tools.push("Docker".to_string());

        save(&store, &doc).await.unwrap();
        assert_eq!(load(&store).await.unwrap(), Some(doc));
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_record() {
        let store = MemoryStore::default();
        let mut first = ResumeDocument::default();
        first.summary = "first".to_string();
        let mut second = ResumeDocument::default();
        second.summary = "second".to_string();

        save(&store, &first).await.unwrap();
        save(&store, &second).await.unwrap();
        assert_eq!(load(&store).await.unwrap(), Some(second));
    }

    #[tokio::test]
    async fn test_malformed_record_loads_as_none() {
        let store = MemoryStore::with_raw("{\"personalInfo\": {\"fullName\": \"Ja");
        assert_eq!(load(&store).await.unwrap(), None);
    }
}
