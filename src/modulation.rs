//! Entrainment amplitude modulation.

use std::f64::consts::TAU;

/// Multiply the signal by a slow sinusoidal gain envelope:
/// `1 + depth * sin(2π·freq·t)`.
///
/// The envelope frequency is the entrainment target the whole pipeline
/// exists to deliver; it must land on the profile's band regardless of
/// session length or chord content.
pub fn apply_entrainment(samples: &mut [f32], freq: f64, depth: f64, sample_rate: u32) {
    let sr = sample_rate as f64;
    for (i, s) in samples.iter_mut().enumerate() {
        let t = i as f64 / sr;
        let gain = 1.0 + depth * (TAU * freq * t).sin();
        *s = (*s as f64 * gain) as f32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modulation_depth_bounds_the_gain() {
        let mut samples = vec![1.0f32; 44100];
        apply_entrainment(&mut samples, 10.0, 0.5, 44100);

        let max = samples.iter().fold(0.0f32, |m, &s| m.max(s));
        let min = samples.iter().fold(2.0f32, |m, &s| m.min(s));
        assert!((max - 1.5).abs() < 1e-3, "max gain should be 1+depth, got {max}");
        assert!((min - 0.5).abs() < 1e-3, "min gain should be 1-depth, got {min}");
    }

    #[test]
    fn modulation_period_matches_the_target() {
        // 2 Hz on a constant signal: gain crosses 1.0 upward twice a second.
        let mut samples = vec![1.0f32; 2 * 44100];
        apply_entrainment(&mut samples, 2.0, 0.4, 44100);

        let mut upward = 0;
        for w in samples.windows(2) {
            if w[0] < 1.0 && w[1] >= 1.0 {
                upward += 1;
            }
        }
        // Interior upward crossings at t = 0.5, 1.0, 1.5 (the one at
        // t = 0 has no predecessor sample to cross from).
        assert_eq!(upward, 3, "2 Hz over 2 s should cross upward 3 times, got {upward}");
    }

    #[test]
    fn zero_depth_is_identity() {
        let mut samples = vec![0.25f32; 1000];
        apply_entrainment(&mut samples, 14.0, 0.0, 44100);
        assert!(samples.iter().all(|&s| (s - 0.25).abs() < 1e-7));
    }
}
