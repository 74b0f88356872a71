//! Toast presenter: resolves theme colors and hands the toast to a renderer

use std::sync::Arc;

use crate::domain::notification::Severity;
use crate::domain::theme::{ThemeColors, ThemeMap};

use super::ports::{Toast, ToastError, Toaster, TOAST_TIMEOUT};

/// Builds themed toasts and shows them through an optional [`Toaster`]
pub struct ToastPresenter {
    toaster: Option<Arc<dyn Toaster>>,
    themes: Option<ThemeMap>,
    current_theme: Option<String>,
    link: Option<String>,
}

impl ToastPresenter {
    /// Create a presenter. Without a toaster every toast is dropped.
    pub fn new(toaster: Option<Arc<dyn Toaster>>) -> Self {
        Self {
            toaster,
            themes: None,
            current_theme: None,
            link: None,
        }
    }

    /// Use a theme map and the name of the active theme
    pub fn with_themes(mut self, themes: Option<ThemeMap>, current: Option<String>) -> Self {
        self.themes = themes;
        self.current_theme = current;
        self
    }

    /// Page opened when a toast is clicked
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn has_toaster(&self) -> bool {
        self.toaster.is_some()
    }

    pub fn colors(&self) -> ThemeColors {
        ThemeColors::resolve(self.themes.as_ref(), self.current_theme.as_deref())
    }

    pub fn build_toast(&self, title: &str, message: &str, severity: Severity) -> Toast {
        Toast {
            title: title.to_string(),
            message: message.to_string(),
            severity,
            colors: self.colors(),
            timeout: TOAST_TIMEOUT,
            link: self.link.clone(),
        }
    }

    /// Show a toast.
    ///
    /// Returns `Ok(false)` when no toaster is available.
    pub async fn show_toast(
        &self,
        title: &str,
        message: &str,
        severity: Severity,
    ) -> Result<bool, ToastError> {
        let Some(toaster) = &self.toaster else {
            tracing::debug!("No toast renderer, dropping toast \"{}\"", title);
            return Ok(false);
        };

        let toast = self.build_toast(title, message, severity);
        toaster.show(&toast).await?;
        Ok(true)
    }
}
