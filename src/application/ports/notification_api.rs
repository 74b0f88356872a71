//! Notification API port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::notification::{NotificationId, NotificationSummary};

/// Notification API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// 401/403: no logged-in dashboard session
    #[error("Not authenticated (HTTP {0})")]
    Unauthenticated(u16),

    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

/// Port for the dashboard's notification endpoints
#[async_trait]
pub trait NotificationApi: Send + Sync {
    /// Fetch the unread count and the latest unread notification.
    async fn fetch_unread(&self) -> Result<NotificationSummary, ApiError>;

    /// Mark a notification as read. The response body is ignored.
    async fn mark_read(&self, id: NotificationId) -> Result<(), ApiError>;
}
