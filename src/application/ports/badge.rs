//! Unread-count badge port interface

use async_trait::async_trait;
use thiserror::Error;

/// Badge errors
#[derive(Debug, Clone, Error)]
pub enum BadgeError {
    #[error("Failed to update badge: {0}")]
    UpdateFailed(String),
}

/// Port for the unread-count badge
#[async_trait]
pub trait Badge: Send + Sync {
    /// Show the badge with `count` as its text
    async fn show(&self, count: u64) -> Result<(), BadgeError>;

    /// Hide the badge
    async fn hide(&self) -> Result<(), BadgeError>;
}
