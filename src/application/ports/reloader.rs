//! Reload port interface

use async_trait::async_trait;
use thiserror::Error;

/// Reload errors
#[derive(Debug, Clone, Error)]
pub enum ReloadError {
    #[error("Reload channel closed")]
    ChannelClosed,
}

/// Port for requesting a dashboard reload.
///
/// A reload re-runs the load sequence, which presents any pending
/// notification carried in session storage.
#[async_trait]
pub trait Reloader: Send + Sync {
    async fn reload(&self) -> Result<(), ReloadError>;
}
