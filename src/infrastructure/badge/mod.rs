//! Unread badge adapters

mod file;
mod noop;

pub use file::FileBadge;
pub use noop::NoOpBadge;

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::Badge;

/// Create a file badge if a path is configured, otherwise a no-op badge
pub fn create_badge(path: Option<PathBuf>) -> Arc<dyn Badge> {
    match path {
        Some(path) => Arc::new(FileBadge::new(path)),
        None => Arc::new(NoOpBadge),
    }
}
