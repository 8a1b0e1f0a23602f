use async_trait::async_trait;
use redis::{AsyncCommands, Client};
use tracing::info;

use super::{ResumeStore, StoreError, RESUME_STORAGE_KEY};

/// Stores the record as a single Redis string key.
#[derive(Clone)]
pub struct RedisStore {
    client: Client,
    key: String,
}

impl RedisStore {
    pub fn new(url: &str) -> Result<Self, StoreError> {
        let client = Client::open(url)?;
        info!("Redis client initialized");
        Ok(Self {
            client,
            key: RESUME_STORAGE_KEY.to_string(),
        })
    }
}

#[async_trait]
impl ResumeStore for RedisStore {
    async fn read_raw(&self) -> Result<Option<String>, StoreError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let raw: Option<String> = conn.get(&self.key).await?;
        Ok(raw)
    }

    async fn write_raw(&self, raw: String) -> Result<(), StoreError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.set::<_, _, ()>(&self.key, raw).await?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.del::<_, ()>(&self.key).await?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}
