use std::{sync::Arc, time::Duration};

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use super::{key_value_store::KeyValueStore, storage_error::StorageError};

#[derive(Serialize, Deserialize)]
struct CacheEnvelope<T> {
    expires_at: DateTime<Utc>,
    value: T,
}

/// JSON values with an expiry, stored under `namespace:key` in an injected
/// `KeyValueStore`. Expired entries read as absent and are removed on read.
pub struct TtlCache {
    store: Arc<dyn KeyValueStore>,
    namespace: String,
    ttl: Duration,
}

impl TtlCache {
    pub fn new(store: Arc<dyn KeyValueStore>, namespace: impl Into<String>, ttl: Duration) -> Self {
        Self {
            store,
            namespace: namespace.into(),
            ttl,
        }
    }

    pub fn namespaced_key(&self, key: &str) -> String {
        format!("{}:{}", self.namespace, key)
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let namespaced_key = self.namespaced_key(key);
        let Some(raw) = self.store.get(&namespaced_key).await? else {
            return Ok(None);
        };

        let envelope: CacheEnvelope<T> = serde_json::from_str(&raw)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        if envelope.expires_at <= Utc::now() {
            self.store.remove(&namespaced_key).await?;
            return Ok(None);
        }

        Ok(Some(envelope.value))
    }

    pub async fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        self.set_with_ttl(key, value, self.ttl).await
    }

    pub async fn set_with_ttl<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> Result<(), StorageError> {
        let expires_at = TimeDelta::from_std(ttl)
            .ok()
            .and_then(|ttl| Utc::now().checked_add_signed(ttl))
            .ok_or(StorageError::InvalidTtl)?;
        let raw = serde_json::to_string(&CacheEnvelope { expires_at, value })
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        self.store.set(&self.namespaced_key(key), raw).await
    }

    pub async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.store.remove(&self.namespaced_key(key)).await
    }
}
