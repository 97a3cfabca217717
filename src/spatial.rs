//! Stereo spatialization.
//!
//! Two policies: a slow rotating pan (equal-power law driven by a
//! low-rate LFO) and plain dual-mono widening. The choice between them
//! is made per mode by the renderer.

use std::f64::consts::{FRAC_PI_4, TAU};

use crate::buffer::StereoBuffer;

/// Pan LFO rate for the rotating stereo field, in Hz.
pub const ROTATION_RATE_HZ: f64 = 0.2;

/// Slowly rock the signal between the channels.
///
/// The pan position `sin(2π·rate·t)` maps through the equal-power law
/// `θ = (pan + 1)·π/4`, `left = cos θ`, `right = sin θ`, keeping
/// perceived loudness constant across the sweep.
pub fn rotate_pan(samples: &[f32], rate_hz: f64, sample_rate: u32) -> StereoBuffer {
    let sr = sample_rate as f64;
    let mut left = Vec::with_capacity(samples.len());
    let mut right = Vec::with_capacity(samples.len());

    for (i, &s) in samples.iter().enumerate() {
        let t = i as f64 / sr;
        let pan = (TAU * rate_hz * t).sin();
        let theta = (pan + 1.0) * FRAC_PI_4;
        left.push((s as f64 * theta.cos()) as f32);
        right.push((s as f64 * theta.sin()) as f32);
    }

    StereoBuffer { left, right }
}

/// Duplicate the mono signal identically into both channels.
pub fn widen(samples: &[f32]) -> StereoBuffer {
    StereoBuffer {
        left: samples.to_vec(),
        right: samples.to_vec(),
    }
}
