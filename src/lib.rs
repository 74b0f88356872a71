//! HMS Notify - desktop notifications for the hotel management dashboard
//!
//! Polls the dashboard's unread-notifications endpoint, keeps an unread
//! badge current, and presents each new notification once with a short
//! audio chirp and a themed toast.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Notification summaries, chirp synthesis, themes, config, errors
//! - **Application**: Poll and reload-recovery use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (HTTP API, rodio, notify-rust, stores)
//! - **CLI**: Command-line interface, argument parsing, logging, and signal handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
