use async_trait::async_trait;

use super::storage_error::StorageError;

/// String key-value persistence. Callers own the key namespace; see `TtlCache`.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError>;

    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
