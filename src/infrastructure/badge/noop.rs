//! No-op badge adapter, used when no badge is configured

use async_trait::async_trait;

use crate::application::ports::{Badge, BadgeError};

pub struct NoOpBadge;

#[async_trait]
impl Badge for NoOpBadge {
    async fn show(&self, _count: u64) -> Result<(), BadgeError> {
        Ok(())
    }

    async fn hide(&self) -> Result<(), BadgeError> {
        Ok(())
    }
}
