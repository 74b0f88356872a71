//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod chirp;
pub mod config;
pub mod error;
pub mod interval;
pub mod notification;
pub mod theme;

// Re-export common types
pub use chirp::{ChirpSamples, ChirpSpec};
pub use config::{AppConfig, ToastBackend};
pub use error::*;
pub use interval::Interval;
pub use notification::{
    NotificationId, NotificationSummary, Severity, LAST_NOTIFICATION_ID_KEY,
    PENDING_NOTIFICATION_KEY,
};
pub use theme::{Rgb, ThemeColors, ThemeEntry, ThemeMap};
