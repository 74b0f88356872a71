//! Silent audio cue for `--no-sound`

use async_trait::async_trait;

use crate::application::ports::{AudioCue, AudioCueError};
use crate::domain::chirp::ChirpSpec;

#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpAudioCue;

impl NoOpAudioCue {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AudioCue for NoOpAudioCue {
    async fn play(&self, chirp: &ChirpSpec) -> Result<(), AudioCueError> {
        tracing::trace!("Chirp muted ({} Hz sweep)", chirp.start_hz);
        Ok(())
    }
}
