//! Reload-recovery use case
//!
//! Runs on every load. If the previous poll carried a notification across
//! the reload, it is taken out of session storage and presented after a
//! short delay: chirp, toast, then a mark-as-read request.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::task::JoinHandle;

use crate::domain::chirp::ChirpSpec;
use crate::domain::notification::{NotificationSummary, PENDING_NOTIFICATION_KEY};

use super::ports::{AudioCue, KeyValueStore, NotificationApi, StoreError};
use super::toast::ToastPresenter;

/// Errors from the recovery step
#[derive(Debug, Error)]
pub enum RecoveryError {
    #[error("Failed to access pending notification: {0}")]
    Store(#[from] StoreError),

    #[error("Error parsing pending notification: {0}")]
    Malformed(String),
}

/// What the delayed presentation managed to do
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresentationReport {
    pub sound_played: bool,
    pub toast_shown: bool,
    /// `None` when the payload had no id to acknowledge
    pub marked_read: Option<bool>,
}

/// Presents a notification carried across a reload
pub struct PendingPresenter {
    api: Arc<dyn NotificationApi>,
    session: Arc<dyn KeyValueStore>,
    audio: Arc<dyn AudioCue>,
    toast: Arc<ToastPresenter>,
    chirp: ChirpSpec,
    delay: Duration,
}

impl PendingPresenter {
    pub fn new(
        api: Arc<dyn NotificationApi>,
        session: Arc<dyn KeyValueStore>,
        audio: Arc<dyn AudioCue>,
        toast: Arc<ToastPresenter>,
        delay: Duration,
    ) -> Self {
        Self {
            api,
            session,
            audio,
            toast,
            chirp: ChirpSpec::notification(),
            delay,
        }
    }

    /// Check for a pending notification and schedule its presentation.
    ///
    /// The pending entry is removed before presentation is scheduled, so a
    /// second load never replays it. If the removal fails nothing is shown. A payload that fails to parse is
    /// left in place and nothing is shown.
    pub async fn recover_pending(
        &self,
    ) -> Result<Option<JoinHandle<PresentationReport>>, RecoveryError> {
        let Some(raw) = self.session.get(PENDING_NOTIFICATION_KEY).await? else {
            return Ok(None);
        };

        let summary = NotificationSummary::from_json(&raw).map_err(|e| {
            tracing::error!("Error parsing pending notification: {}", e);
            RecoveryError::Malformed(e.to_string())
        })?;

        // Cleared first: a payload is never both stored and scheduled
        self.session.remove(PENDING_NOTIFICATION_KEY).await?;

        tracing::info!("Showing pending notification after reload");

        let handle = tokio::spawn(present(
            summary,
            Arc::clone(&self.api),
            Arc::clone(&self.audio),
            Arc::clone(&self.toast),
            self.chirp,
            self.delay,
        ));

        Ok(Some(handle))
    }
}

async fn present(
    summary: NotificationSummary,
    api: Arc<dyn NotificationApi>,
    audio: Arc<dyn AudioCue>,
    toast: Arc<ToastPresenter>,
    chirp: ChirpSpec,
    delay: Duration,
) -> PresentationReport {
    tokio::time::sleep(delay).await;

    let mut report = PresentationReport::default();

    match audio.play(&chirp).await {
        Ok(()) => {
            tracing::debug!("Sound played");
            report.sound_played = true;
        }
        Err(e) => tracing::warn!("Audio playback failed: {}", e),
    }

    match toast
        .show_toast(
            summary.latest_title.as_deref().unwrap_or_default(),
            summary.latest_message.as_deref().unwrap_or_default(),
            summary.severity(),
        )
        .await
    {
        Ok(shown) => report.toast_shown = shown,
        Err(e) => tracing::warn!("{}", e),
    }

    if let Some(id) = summary.latest() {
        let acknowledged = match api.mark_read(id).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Failed to mark notification {} as read: {}", id, e);
                false
            }
        };
        report.marked_read = Some(acknowledged);
    }

    report
}
