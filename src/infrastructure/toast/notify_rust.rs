//! Desktop toast adapter using notify-rust
//!
//! Dismiss timing and hover behavior are left to the notification server.
//! On freedesktop systems, clicking the toast opens its link.

use async_trait::async_trait;
use notify_rust::{Notification, Timeout};

use crate::application::ports::{Toast, ToastError, Toaster};

/// Action id the notification server reports for a body click
const DEFAULT_ACTION: &str = "default";

/// Cross-platform desktop toaster using notify-rust
pub struct NotifyRustToaster {
    /// Application name for notifications
    app_name: String,
}

impl NotifyRustToaster {
    /// Create a new notify-rust toaster
    pub fn new() -> Self {
        Self {
            app_name: "HMS Notify".to_string(),
        }
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }
}

impl Default for NotifyRustToaster {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Toaster for NotifyRustToaster {
    async fn show(&self, toast: &Toast) -> Result<(), ToastError> {
        let toast = toast.clone();
        let app_name = self.app_name.clone();

        // notify-rust operations can block, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            let timeout_ms = u32::try_from(toast.timeout.as_millis()).unwrap_or(u32::MAX);

            let mut notification = Notification::new();
            notification
                .appname(&app_name)
                .summary(&toast.title)
                .body(&toast.message)
                .icon(toast.severity.icon_name())
                .timeout(Timeout::Milliseconds(timeout_ms));

            if toast.link.is_some() {
                notification.action(DEFAULT_ACTION, "Open notifications");
            }

            let handle = notification
                .show()
                .map_err(|e| ToastError::ShowFailed(e.to_string()))?;

            watch_for_click(handle, toast.link);

            Ok(())
        })
        .await
        .map_err(|e| ToastError::ShowFailed(format!("Task join error: {}", e)))?
    }
}

/// Open the toast's link when its body is clicked
#[cfg(all(unix, not(target_os = "macos")))]
fn watch_for_click(handle: notify_rust::NotificationHandle, link: Option<String>) {
    let Some(link) = link else {
        return;
    };

    // Blocks until the toast is clicked or closed
    std::thread::spawn(move || {
        handle.wait_for_action(|action| {
            if action == DEFAULT_ACTION {
                open_link(&link);
            }
        });
    });
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
fn watch_for_click<H>(_handle: H, _link: Option<String>) {}

#[cfg(all(unix, not(target_os = "macos")))]
fn open_link(link: &str) {
    use std::process::{Command, Stdio};

    let result = Command::new("xdg-open")
        .arg(link)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    if let Err(e) = result {
        tracing::warn!("Failed to open {}: {}", link, e);
    }
}
