//! Port for the audible chirp that accompanies a toast

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::chirp::ChirpSpec;

#[derive(Error, Debug, Clone)]
pub enum AudioCueError {
    #[error("Chirp playback failed: {0}")]
    PlaybackFailed(String),

    /// No output device, or the audio context could not be opened
    #[error("No audio output: {0}")]
    DeviceNotAvailable(String),
}

/// Plays synthesized chirps
#[async_trait]
pub trait AudioCue: Send + Sync {
    /// Open the output context ahead of the first chirp.
    ///
    /// Adapters that open lazily can keep the default.
    async fn warm_up(&self) -> Result<(), AudioCueError> {
        Ok(())
    }

    /// Play `chirp` once. Resolves after the last sample is rendered.
    async fn play(&self, chirp: &ChirpSpec) -> Result<(), AudioCueError>;
}
