//! Configuration value objects

mod app_config;

pub use app_config::{AppConfig, ToastBackend, DEFAULT_BASE_URL};
