//! Terminal toast adapter
//!
//! Draws a themed banner on stderr with a progress bar that drains over the
//! toast's timeout, then clears it.

use std::time::Duration;

use async_trait::async_trait;
use colored::{ColoredString, Colorize};
use indicatif::{ProgressBar, ProgressStyle};

use crate::application::ports::{Toast, ToastError, Toaster};
use crate::domain::notification::Severity;

/// Progress bar refresh period
const TICK: Duration = Duration::from_millis(100);

/// Toaster rendering to the terminal
pub struct TerminalToaster;

impl TerminalToaster {
    pub fn new() -> Self {
        Self
    }

    /// Banner text with theme colors applied
    fn banner(toast: &Toast) -> ColoredString {
        let colors = toast.colors;
        let mut text = format!(" {} {} ", glyph(toast.severity), toast.title);
        if !toast.message.is_empty() {
            text.push_str(&format!("- {} ", toast.message));
        }

        text.truecolor(colors.foreground.0, colors.foreground.1, colors.foreground.2)
            .on_truecolor(colors.background.0, colors.background.1, colors.background.2)
    }
}

impl Default for TerminalToaster {
    fn default() -> Self {
        Self::new()
    }
}

fn glyph(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "ℹ",
        Severity::Success => "✓",
        Severity::Warning => "⚠",
        Severity::Error => "✗",
        Severity::Question => "?",
    }
}

#[async_trait]
impl Toaster for TerminalToaster {
    async fn show(&self, toast: &Toast) -> Result<(), ToastError> {
        let total_ms = u64::try_from(toast.timeout.as_millis()).unwrap_or(u64::MAX);
        let style = ProgressStyle::default_bar()
            .template("{msg}\n{bar:40.cyan/blue}")
            .map_err(|e| ToastError::ShowFailed(e.to_string()))?
            .progress_chars("█░ ");

        let bar = ProgressBar::new(total_ms);
        bar.set_style(style);
        bar.set_position(total_ms);
        bar.set_message(Self::banner(toast).to_string());

        if let Some(link) = &toast.link {
            tracing::debug!("Toast link: {}", link);
        }

        // Drain the bar, then dismiss
        tokio::spawn(async move {
            let mut remaining = total_ms;
            while remaining > 0 {
                tokio::time::sleep(TICK).await;
                remaining = remaining.saturating_sub(TICK.as_millis() as u64);
                bar.set_position(remaining);
            }
            bar.finish_and_clear();
        });

        Ok(())
    }
}
