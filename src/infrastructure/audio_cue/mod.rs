//! Audio cue infrastructure adapters
//!
//! Plays the chirp that accompanies a new notification.

mod noop;
mod rodio;

pub use noop::NoOpAudioCue;
pub use rodio::RodioAudioCue;

use std::sync::Arc;

use crate::application::ports::AudioCue;

/// Create an audio cue adapter based on whether sound is enabled
pub fn create_audio_cue(enabled: bool) -> Arc<dyn AudioCue> {
    if enabled {
        Arc::new(RodioAudioCue::new())
    } else {
        Arc::new(NoOpAudioCue::new())
    }
}
