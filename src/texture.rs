//! Filtered-noise ambience bed.
//!
//! A constant low-level texture layered under the chord bed, independent
//! of the musical content. White noise is integrated into a brown-noise
//! random walk, peak-normalized, softened with a short moving average,
//! and scaled well below the pads.

use rand::Rng;

/// Moving-average window width in samples.
const SMOOTHING_WINDOW: usize = 50;

/// Output level of the bed relative to full scale.
const TEXTURE_LEVEL: f32 = 0.15;

/// Render the ambience bed for the full session duration.
pub fn render_texture<R: Rng>(duration: f64, sample_rate: u32, rng: &mut R) -> Vec<f32> {
    let len = (duration * sample_rate as f64) as usize;
    if len == 0 {
        return Vec::new();
    }

    // Integrated white noise approximates brown noise. The running sum
    // stays in f64; an f32 accumulator drifts over multi-minute beds.
    let mut brown = vec![0.0f64; len];
    let mut acc = 0.0f64;
    for b in brown.iter_mut() {
        acc += rng.gen::<f64>() * 2.0 - 1.0;
        *b = acc;
    }

    let peak = brown.iter().fold(0.0f64, |m, v| m.max(v.abs()));
    if peak > 0.0 {
        for b in brown.iter_mut() {
            *b /= peak;
        }
    }

    // Centered moving average via a sliding window sum; the edges see
    // zero padding, matching a fixed denominator of WINDOW samples.
    let half = SMOOTHING_WINDOW / 2;
    let mut acc: f64 = brown.iter().take(half).sum();
    let mut out = Vec::with_capacity(len);
    for i in 0..len {
        out.push((acc / SMOOTHING_WINDOW as f64) as f32 * TEXTURE_LEVEL);
        if i + half < len {
            acc += brown[i + half];
        }
        if i >= half {
            acc -= brown[i - half];
        }
    }
    out
}
