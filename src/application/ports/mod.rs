//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod audio_cue;
pub mod badge;
pub mod config;
pub mod notification_api;
pub mod reloader;
pub mod store;
pub mod toaster;

// Re-export common types
pub use audio_cue::{AudioCue, AudioCueError};
pub use badge::{Badge, BadgeError};
pub use config::ConfigStore;
pub use notification_api::{ApiError, NotificationApi};
pub use reloader::{ReloadError, Reloader};
pub use store::{KeyValueStore, StoreError};
pub use toaster::{Toast, ToastError, Toaster, TOAST_TIMEOUT};
