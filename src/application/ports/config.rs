//! Configuration port interface

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Port for the persisted config file
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Read the stored config. A missing file is an empty config, not an error.
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Replace the stored config
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    fn path(&self) -> PathBuf;

    fn exists(&self) -> bool;

    /// Write the defaults. Errors with [`ConfigError::AlreadyExists`] if a file is present.
    async fn init(&self) -> Result<(), ConfigError>;

    /// Stored config, or an empty one if it cannot be read
    async fn load_or_empty(&self) -> AppConfig {
        match self.load().await {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config file {}: {}", self.path().display(), e);
                AppConfig::empty()
            }
        }
    }
}
