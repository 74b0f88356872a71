//! Key-value storage port interface

use async_trait::async_trait;
use thiserror::Error;

/// Storage errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Failed to read state: {0}")]
    ReadFailed(String),

    #[error("Failed to write state: {0}")]
    WriteFailed(String),

    #[error("State file is corrupt: {0}")]
    Corrupt(String),
}

/// Port for string key-value storage.
///
/// Two instances are used: a durable one that survives restarts and a
/// session one that lives as long as the process.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a key. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
}
