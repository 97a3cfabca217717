//! Sine oscillator primitive for additive synthesis.

use std::f64::consts::TAU;

/// Generate a sine wave at `freq` Hz lasting `duration` seconds.
///
/// `sample[i] = sin(2π·freq·i/sample_rate + phase)`. Pure and
/// deterministic for a given phase. Phase math runs in f64 so long
/// buffers do not accumulate drift before the f32 cast.
pub fn sine_wave(freq: f64, duration: f64, phase: f64, sample_rate: u32) -> Vec<f32> {
    let len = (duration * sample_rate as f64) as usize;
    let sr = sample_rate as f64;

    let mut samples = Vec::with_capacity(len);
    for i in 0..len {
        let t = i as f64 / sr;
        samples.push((TAU * freq * t + phase).sin() as f32);
    }
    samples
}
