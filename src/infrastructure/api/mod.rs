//! Notification API adapters

pub mod cookie;
mod http;

pub use http::{HttpNotificationApi, NOTIFICATIONS_PAGE_PATH};
