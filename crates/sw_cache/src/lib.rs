use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sw_core::Result;
use tracing::warn;

pub mod memory;

pub use memory::MemoryCache;

/// String-valued key-value store with a TTL applied at write time.
///
/// Implementations are external collaborators (Redis in production); tests
/// substitute [`MemoryCache`]. Concurrent writes to the same key race at the
/// storage layer with last-write-wins.
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<()>;

    async fn delete(&self, key: &str) -> Result<()>;
}

/// Namespaced JSON view over a [`CacheStore`].
///
/// Every key is prefixed with the namespace, so two sites can never collide
/// on the same source URL. Successes use the default TTL, failures the
/// dedicated failure TTL; both can be overridden per call.
#[derive(Clone)]
pub struct Keyspace {
    store: Arc<dyn CacheStore>,
    namespace: String,
    ttl: Duration,
    failure_ttl: Duration,
}

impl Keyspace {
    pub fn new(
        store: Arc<dyn CacheStore>,
        namespace: impl Into<String>,
        ttl: Duration,
        failure_ttl: Duration,
    ) -> Self {
        Self {
            store,
            namespace: namespace.into(),
            ttl,
            failure_ttl,
        }
    }

    fn keyname(&self, key: &str) -> String {
        format!("{}-{}", self.namespace, key)
    }

    pub async fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let raw = self.store.get(&self.keyname(key)).await?;
        match raw {
            // A corrupt entry is treated as a miss, not an error.
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => Ok(Some(value)),
                Err(err) => {
                    warn!("discarding unreadable cache entry for {}: {}", key, err);
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    pub async fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        self.save_with_ttl(key, value, self.ttl).await
    }

    pub async fn save_failure<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        self.save_with_ttl(key, value, self.failure_ttl).await
    }

    pub async fn save_with_ttl<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.store.set(&self.keyname(key), &raw, ttl).await
    }

    pub async fn delete(&self, key: &str) -> Result<()> {
        self.store.delete(&self.keyname(key)).await
    }
}
