//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the dashboard API, the filesystem, audio output
//! and the desktop notification server.

pub mod api;
pub mod audio_cue;
pub mod badge;
pub mod config;
pub mod store;
pub mod toast;

// Re-export adapters
pub use api::HttpNotificationApi;
pub use audio_cue::{create_audio_cue, NoOpAudioCue, RodioAudioCue};
pub use badge::{create_badge, FileBadge, NoOpBadge};
pub use config::XdgConfigStore;
pub use store::{FileStore, MemoryStore};
pub use toast::{create_toaster, NotifyRustToaster, TerminalToaster};
