//! Rodio-based audio cue adapter
//!
//! The output stream is opened once, on first use, and owned by a dedicated
//! audio thread for the rest of the process. Playback requests reach it over
//! a channel.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use async_trait::async_trait;
use rodio::source::Source;
use rodio::{OutputStream, OutputStreamHandle, Sink};
use tokio::sync::{oneshot, OnceCell};

use crate::application::ports::{AudioCue, AudioCueError};
use crate::domain::chirp::{ChirpSamples, ChirpSpec};

/// Sample rate the chirp is rendered at
const SAMPLE_RATE: u32 = 44_100;

struct PlayRequest {
    chirp: ChirpSpec,
    done: oneshot::Sender<Result<(), AudioCueError>>,
}

/// Handle to the audio thread
struct AudioContext {
    requests: mpsc::Sender<PlayRequest>,
}

impl AudioContext {
    /// Spawn the audio thread and wait until its output stream is open
    fn open() -> Result<Self, AudioCueError> {
        let (requests, inbox) = mpsc::channel::<PlayRequest>();
        let (ready_tx, ready_rx) = mpsc::channel();

        thread::Builder::new()
            .name("hms-notify-audio".to_string())
            .spawn(move || {
                let (_stream, handle) = match OutputStream::try_default() {
                    Ok(pair) => {
                        let _ = ready_tx.send(Ok(()));
                        pair
                    }
                    Err(e) => {
                        let _ = ready_tx.send(Err(AudioCueError::DeviceNotAvailable(e.to_string())));
                        return;
                    }
                };

                for request in inbox {
                    let result = play_on(&handle, request.chirp);
                    let _ = request.done.send(result);
                }
            })
            .map_err(|e| AudioCueError::DeviceNotAvailable(e.to_string()))?;

        ready_rx
            .recv()
            .map_err(|e| AudioCueError::DeviceNotAvailable(e.to_string()))??;

        Ok(Self { requests })
    }
}

/// Audio cue implementation using rodio
pub struct RodioAudioCue {
    context: OnceCell<AudioContext>,
}

impl RodioAudioCue {
    /// Create a new rodio-based audio cue. No device is opened yet.
    pub fn new() -> Self {
        Self {
            context: OnceCell::new(),
        }
    }

    async fn context(&self) -> Result<&AudioContext, AudioCueError> {
        self.context
            .get_or_try_init(|| async {
                // Opening a device can block
                tokio::task::spawn_blocking(AudioContext::open)
                    .await
                    .map_err(|e| AudioCueError::PlaybackFailed(format!("Task join error: {}", e)))?
            })
            .await
    }
}

impl Default for RodioAudioCue {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AudioCue for RodioAudioCue {
    async fn warm_up(&self) -> Result<(), AudioCueError> {
        self.context().await.map(|_| ())
    }

    async fn play(&self, chirp: &ChirpSpec) -> Result<(), AudioCueError> {
        let context = self.context().await?;
        let (done, finished) = oneshot::channel();

        context
            .requests
            .send(PlayRequest {
                chirp: *chirp,
                done,
            })
            .map_err(|_| AudioCueError::PlaybackFailed("Audio thread stopped".to_string()))?;

        finished
            .await
            .map_err(|_| AudioCueError::PlaybackFailed("Audio thread stopped".to_string()))?
    }
}

/// Play one chirp on the audio thread and wait for it to finish
fn play_on(handle: &OutputStreamHandle, chirp: ChirpSpec) -> Result<(), AudioCueError> {
    let sink = Sink::try_new(handle).map_err(|e| AudioCueError::PlaybackFailed(e.to_string()))?;
    sink.append(ChirpSource::new(chirp, SAMPLE_RATE));
    sink.sleep_until_end();
    Ok(())
}

/// Rodio source over the rendered chirp
struct ChirpSource {
    samples: ChirpSamples,
}

impl ChirpSource {
    fn new(chirp: ChirpSpec, sample_rate: u32) -> Self {
        Self {
            samples: chirp.samples(sample_rate),
        }
    }
}

impl Iterator for ChirpSource {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        self.samples.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.samples.size_hint()
    }
}

impl Source for ChirpSource {
    fn current_frame_len(&self) -> Option<usize> {
        Some(self.samples.remaining())
    }

    fn channels(&self) -> u16 {
        1
    }

    fn sample_rate(&self) -> u32 {
        self.samples.sample_rate()
    }

    fn total_duration(&self) -> Option<Duration> {
        Some(self.samples.spec().duration())
    }
}
