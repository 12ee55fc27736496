use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("cache entry could not be serialized: {0}")]
    Serialization(String),

    #[error("ttl is out of range")]
    InvalidTtl,
}
