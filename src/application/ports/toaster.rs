//! Toast rendering port interface

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::notification::Severity;
use crate::domain::theme::ThemeColors;

/// Auto-dismiss time for toasts
pub const TOAST_TIMEOUT: Duration = Duration::from_secs(5);

/// Toast errors
#[derive(Debug, Clone, Error)]
pub enum ToastError {
    #[error("Failed to show toast: {0}")]
    ShowFailed(String),
}

/// A fully resolved toast
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub colors: ThemeColors,
    pub timeout: Duration,
    /// Opened when the toast is clicked
    pub link: Option<String>,
}

/// Port for toast popups
#[async_trait]
pub trait Toaster: Send + Sync {
    /// Show a toast. Returns once it is on screen, not when it is dismissed.
    async fn show(&self, toast: &Toast) -> Result<(), ToastError>;
}
