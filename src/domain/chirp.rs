//! Synthesized notification chirp
//!
//! A short sine tone whose pitch sweeps up and whose volume decays, both
//! along exponential ramps.

use std::f32::consts::TAU;
use std::time::Duration;

/// Parameters of the chirp tone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChirpSpec {
    pub start_hz: f32,
    pub end_hz: f32,
    /// Time for the pitch sweep, in seconds
    pub sweep_secs: f32,
    pub start_gain: f32,
    pub end_gain: f32,
    /// Time for the volume decay, in seconds
    pub decay_secs: f32,
    /// Total tone length, in seconds
    pub duration_secs: f32,
}

impl ChirpSpec {
    /// 500Hz to 1000Hz over 0.1s, gain 0.3 to 0.01 over 0.5s
    pub const fn notification() -> Self {
        Self {
            start_hz: 500.0,
            end_hz: 1000.0,
            sweep_secs: 0.1,
            start_gain: 0.3,
            end_gain: 0.01,
            decay_secs: 0.5,
            duration_secs: 0.5,
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_secs_f32(self.duration_secs)
    }

    /// Instantaneous frequency at `t` seconds
    pub fn frequency_at(&self, t: f32) -> f32 {
        exponential_ramp(self.start_hz, self.end_hz, self.sweep_secs, t)
    }

    /// Amplitude envelope at `t` seconds
    pub fn gain_at(&self, t: f32) -> f32 {
        exponential_ramp(self.start_gain, self.end_gain, self.decay_secs, t)
    }

    /// Number of mono samples at the given rate
    pub fn sample_count(&self, sample_rate: u32) -> usize {
        (self.duration_secs * sample_rate as f32).round() as usize
    }

    /// Render the tone as mono samples
    pub fn samples(&self, sample_rate: u32) -> ChirpSamples {
        ChirpSamples {
            spec: *self,
            sample_rate,
            index: 0,
            total: self.sample_count(sample_rate),
            phase: 0.0,
        }
    }
}

impl Default for ChirpSpec {
    fn default() -> Self {
        Self::notification()
    }
}

/// `v0 * (v1 / v0) ^ (t / span)`, holding `v1` once `t >= span`
fn exponential_ramp(v0: f32, v1: f32, span: f32, t: f32) -> f32 {
    if t <= 0.0 {
        return v0;
    }
    if span <= 0.0 || t >= span {
        return v1;
    }
    v0 * (v1 / v0).powf(t / span)
}

/// Iterator over the chirp's mono samples
#[derive(Debug, Clone)]
pub struct ChirpSamples {
    spec: ChirpSpec,
    sample_rate: u32,
    index: usize,
    total: usize,
    phase: f32,
}

impl ChirpSamples {
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn remaining(&self) -> usize {
        self.total - self.index
    }

    pub fn spec(&self) -> &ChirpSpec {
        &self.spec
    }
}

impl Iterator for ChirpSamples {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.index >= self.total {
            return None;
        }

        let t = self.index as f32 / self.sample_rate as f32;
        let sample = self.spec.gain_at(t) * self.phase.sin();

        // Integrate frequency so the sweep stays continuous
        self.phase = (self.phase + TAU * self.spec.frequency_at(t) / self.sample_rate as f32) % TAU;
        self.index += 1;

        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ChirpSamples {}
