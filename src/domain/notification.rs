//! Notification summary as returned by the unread-notifications endpoint

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Durable key holding the last notification id that was acted on
pub const LAST_NOTIFICATION_ID_KEY: &str = "last_notification_id";

/// Session key carrying a notification across a reload
pub const PENDING_NOTIFICATION_KEY: &str = "pending_notification";

/// Server-assigned notification id. Monotonically increasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(u64);

impl NotificationId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Parse a stored id the way the dashboard always has: leading integer
    /// prefix wins, anything unparsable reads as 0.
    pub fn parse_lenient(input: &str) -> Self {
        Self(parse_int_prefix(input).unwrap_or(0))
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Notification severity, used for the toast icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
    Question,
}

impl Severity {
    /// Resolve a severity tag from the API. Missing, empty and unknown tags are `Info`.
    pub fn from_tag(tag: Option<&str>) -> Self {
        tag.filter(|t| !t.trim().is_empty())
            .and_then(|t| t.parse().ok())
            .unwrap_or_default()
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Question => "question",
        }
    }

    /// Get the freedesktop icon name
    pub const fn icon_name(&self) -> &'static str {
        match self {
            Self::Info => "dialog-information",
            Self::Success => "dialog-ok",
            Self::Warning => "dialog-warning",
            Self::Error => "dialog-error",
            Self::Question => "dialog-question",
        }
    }
}

impl FromStr for Severity {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "success" => Ok(Self::Success),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "question" => Ok(Self::Question),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unread state for the current user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSummary {
    #[serde(default)]
    pub unread_count: u64,
    #[serde(default, deserialize_with = "deserialize_lenient_id")]
    pub latest_id: Option<NotificationId>,
    #[serde(default)]
    pub latest_title: Option<String>,
    #[serde(default)]
    pub latest_message: Option<String>,
    #[serde(default)]
    pub latest_type: Option<String>,
}

impl NotificationSummary {
    /// The latest id, if it is present and non-zero
    pub fn latest(&self) -> Option<NotificationId> {
        self.latest_id.filter(|id| id.get() > 0)
    }

    /// Whether the latest notification is newer than `last_seen`
    pub fn is_newer_than(&self, last_seen: NotificationId) -> bool {
        self.latest().is_some_and(|id| id > last_seen)
    }

    pub fn severity(&self) -> Severity {
        Severity::from_tag(self.latest_type.as_deref())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Accepts a number, a numeric string or null
fn deserialize_lenient_id<'de, D>(deserializer: D) -> Result<Option<NotificationId>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let id = match value {
        serde_json::Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f >= 0.0).map(|f| f as u64)),
        serde_json::Value::String(s) => parse_int_prefix(&s),
        _ => None,
    };
    Ok(id.map(NotificationId))
}

/// Parse the leading run of digits, ignoring leading whitespace and a `+` sign.
/// Negative numbers are rejected.
fn parse_int_prefix(input: &str) -> Option<u64> {
    let trimmed = input.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits: String = unsigned.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}
