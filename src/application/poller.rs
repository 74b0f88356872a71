//! Notification poller use case

use std::sync::Arc;

use thiserror::Error;

use crate::domain::notification::{
    NotificationId, NotificationSummary, LAST_NOTIFICATION_ID_KEY, PENDING_NOTIFICATION_KEY,
};

use super::ports::{
    ApiError, Badge, KeyValueStore, NotificationApi, ReloadError, Reloader, StoreError,
};

/// Errors from a poll cycle
#[derive(Debug, Error)]
pub enum PollError {
    #[error("Unread notifications request failed: {0}")]
    Api(ApiError),

    #[error("State storage failed: {0}")]
    Store(#[from] StoreError),

    #[error("Failed to serialize pending notification: {0}")]
    Encode(String),

    #[error("Failed to request reload: {0}")]
    Reload(#[from] ReloadError),
}

/// Result of one successful poll cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// 401/403: no session, nothing was touched
    Unauthenticated,
    /// Badge updated, nothing new
    Unchanged { unread_count: u64 },
    /// A newer notification was stored for presentation and a reload requested
    NewNotification {
        id: NotificationId,
        unread_count: u64,
    },
}

/// Polls the unread endpoint and detects new notifications
pub struct NotificationPoller {
    api: Arc<dyn NotificationApi>,
    durable: Arc<dyn KeyValueStore>,
    session: Arc<dyn KeyValueStore>,
    badge: Arc<dyn Badge>,
    reloader: Arc<dyn Reloader>,
}

impl NotificationPoller {
    pub fn new(
        api: Arc<dyn NotificationApi>,
        durable: Arc<dyn KeyValueStore>,
        session: Arc<dyn KeyValueStore>,
        badge: Arc<dyn Badge>,
        reloader: Arc<dyn Reloader>,
    ) -> Self {
        Self {
            api,
            durable,
            session,
            badge,
            reloader,
        }
    }

    /// Last notification id acted on.
    ///
    /// Missing, invalid, or unreadable state reads as 0.
    pub async fn last_seen_id(&self) -> NotificationId {
        match self.durable.get(LAST_NOTIFICATION_ID_KEY).await {
            Ok(stored) => stored
                .as_deref()
                .map(NotificationId::parse_lenient)
                .unwrap_or_default(),
            Err(e) => {
                tracing::warn!("Treating last seen id as 0: {}", e);
                NotificationId::default()
            }
        }
    }

    /// Run one poll cycle
    pub async fn check_notifications(&self) -> Result<PollOutcome, PollError> {
        let summary = match self.api.fetch_unread().await {
            Ok(summary) => summary,
            Err(ApiError::Unauthenticated(status)) => {
                tracing::debug!("Not logged in (HTTP {}), skipping poll", status);
                return Ok(PollOutcome::Unauthenticated);
            }
            Err(e) => return Err(PollError::Api(e)),
        };

        self.update_badge(summary.unread_count).await;

        let last_seen = self.last_seen_id().await;
        let unread_count = summary.unread_count;

        let Some(id) = summary.latest().filter(|_| summary.is_newer_than(last_seen)) else {
            return Ok(PollOutcome::Unchanged { unread_count });
        };

        tracing::info!(
            "New notification detected: id {} > last seen {}",
            id,
            last_seen
        );

        // Must land before the reload so the next poll cannot re-trigger
        self.durable
            .set(LAST_NOTIFICATION_ID_KEY, &id.to_string())
            .await?;

        self.store_pending(&summary).await?;

        tracing::info!("Reloading dashboard");
        self.reloader.reload().await?;

        Ok(PollOutcome::NewNotification { id, unread_count })
    }

    async fn update_badge(&self, unread_count: u64) {
        let result = if unread_count > 0 {
            self.badge.show(unread_count).await
        } else {
            self.badge.hide().await
        };
        if let Err(e) = result {
            tracing::warn!("{}", e);
        }
    }

    async fn store_pending(&self, summary: &NotificationSummary) -> Result<(), PollError> {
        let json = summary
            .to_json()
            .map_err(|e| PollError::Encode(e.to_string()))?;
        self.session.set(PENDING_NOTIFICATION_KEY, &json).await?;
        Ok(())
    }
}
