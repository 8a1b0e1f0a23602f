use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{ResumeStore, StoreError};

/// Process-local store. Contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RwLock<Option<String>>,
}

impl MemoryStore {
    #[cfg(test)]
    /// A store pre-seeded with raw record text, as if a previous session wrote it.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: RwLock::new(Some(raw.into())),
        }
    }
}

#[async_trait]
impl ResumeStore for MemoryStore {
    async fn read_raw(&self) -> Result<Option<String>, StoreError> {
        Ok(self.slot.read().await.clone())
    }

    async fn write_raw(&self, raw: String) -> Result<(), StoreError> {
        *self.slot.write().await = Some(raw);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        *self.slot.write().await = None;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
