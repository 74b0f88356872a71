//! Application configuration value object

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::InvalidToastBackendError;
use crate::domain::interval::Interval;
use crate::domain::theme::{ThemeMap, DEFAULT_THEME};

/// Dashboard address used when none is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Where toasts are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastBackend {
    /// Desktop notification server (notify-rust)
    #[default]
    Desktop,
    /// Colored banner with a dismiss progress bar on stderr
    Terminal,
    /// No toast renderer; presenting a toast is a no-op
    None,
}

impl ToastBackend {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Terminal => "terminal",
            Self::None => "none",
        }
    }
}

impl FromStr for ToastBackend {
    type Err = InvalidToastBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "desktop" => Ok(Self::Desktop),
            "terminal" => Ok(Self::Terminal),
            "none" => Ok(Self::None),
            _ => Err(InvalidToastBackendError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ToastBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub base_url: Option<String>,
    pub session_id: Option<String>,
    pub csrf_token: Option<String>,
    pub poll_interval: Option<String>,
    pub present_delay: Option<String>,
    pub sound: Option<bool>,
    pub toast: Option<String>,
    pub badge_file: Option<PathBuf>,
    pub state_file: Option<PathBuf>,
    pub theme: Option<String>,
    pub on_reload: Option<String>,
    pub themes: Option<ThemeMap>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            base_url: Some(DEFAULT_BASE_URL.to_string()),
            session_id: None,
            csrf_token: None,
            poll_interval: Some(Interval::default_poll_interval().to_string()),
            present_delay: Some(Interval::default_present_delay().to_string()),
            sound: Some(true),
            toast: Some(ToastBackend::default().to_string()),
            badge_file: None,
            state_file: None,
            theme: Some(DEFAULT_THEME.to_string()),
            on_reload: None,
            themes: None,
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            base_url: other.base_url.or(self.base_url),
            session_id: other.session_id.or(self.session_id),
            csrf_token: other.csrf_token.or(self.csrf_token),
            poll_interval: other.poll_interval.or(self.poll_interval),
            present_delay: other.present_delay.or(self.present_delay),
            sound: other.sound.or(self.sound),
            toast: other.toast.or(self.toast),
            badge_file: other.badge_file.or(self.badge_file),
            state_file: other.state_file.or(self.state_file),
            theme: other.theme.or(self.theme),
            on_reload: other.on_reload.or(self.on_reload),
            themes: Self::merge_themes(self.themes, other.themes),
        }
    }

    /// Merge theme maps entry by entry
    fn merge_themes(base: Option<ThemeMap>, other: Option<ThemeMap>) -> Option<ThemeMap> {
        match (base, other) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(mut b), Some(o)) => {
                b.extend(o);
                Some(b)
            }
        }
    }

    /// Get base URL without a trailing slash
    pub fn base_url_or_default(&self) -> String {
        self.base_url
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
            .trim()
            .trim_end_matches('/')
            .to_string()
    }

    /// Get poll interval, or default if not set/invalid
    pub fn poll_interval_or_default(&self) -> Interval {
        self.poll_interval
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(Interval::default_poll_interval)
    }

    /// Get presentation delay, or default if not set/invalid
    pub fn present_delay_or_default(&self) -> Interval {
        self.present_delay
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(Interval::default_present_delay)
    }

    /// Get sound setting, or true if not set
    pub fn sound_or_default(&self) -> bool {
        self.sound.unwrap_or(true)
    }

    /// Get toast backend, or desktop if not set/invalid
    pub fn toast_or_default(&self) -> ToastBackend {
        self.toast
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get the current theme name, or theme-default if not set
    pub fn theme_or_default(&self) -> &str {
        self.theme.as_deref().unwrap_or(DEFAULT_THEME)
    }

    /// Cookie header value carrying the dashboard session
    pub fn cookie_header(&self) -> Option<String> {
        let pairs: Vec<String> = [
            ("sessionid", self.session_id.as_deref()),
            ("csrftoken", self.csrf_token.as_deref()),
        ]
        .into_iter()
        .filter_map(|(name, value)| {
            value
                .filter(|v| !v.is_empty())
                .map(|v| format!("{}={}", name, v))
        })
        .collect();

        if pairs.is_empty() {
            None
        } else {
            Some(pairs.join("; "))
        }
    }
}
