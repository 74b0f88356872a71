//! File badge adapter
//!
//! Writes the unread count to a file that status bars can watch. A hidden
//! badge is an empty file.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::{Badge, BadgeError};

/// Badge backed by a text file
pub struct FileBadge {
    path: PathBuf,
}

impl FileBadge {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn write(&self, text: &str) -> Result<(), BadgeError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| BadgeError::UpdateFailed(e.to_string()))?;
        }
        fs::write(&self.path, text)
            .await
            .map_err(|e| BadgeError::UpdateFailed(e.to_string()))
    }
}

#[async_trait]
impl Badge for FileBadge {
    async fn show(&self, count: u64) -> Result<(), BadgeError> {
        self.write(&count.to_string()).await
    }

    async fn hide(&self) -> Result<(), BadgeError> {
        self.write("").await
    }
}
