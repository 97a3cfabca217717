//! Additive pad synthesis with chorus detuning.
//!
//! Each chord tone is voiced by a triple of sine oscillators: one at the
//! exact frequency and two detuned by ±0.5% at independent random phases.
//! The stacked result is peak-normalized and shaped with a trapezoid
//! attack/release envelope that reaches exactly zero at both edges, so
//! pads can be overlap-added without clicks.

use rand::Rng;
use std::f64::consts::TAU;

use crate::buffer::normalize_peak;
use crate::oscillator::sine_wave;

/// Detune offset for the chorus voices, as a fraction of the tone frequency.
const DETUNE: f64 = 0.005;

/// Pad envelope fade times in seconds.
const ATTACK_SECS: f64 = 2.0;
const RELEASE_SECS: f64 = 2.0;

/// Chord qualities available to the session profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChordQuality {
    Major,
    Minor,
    Sus2,
    Lydian,
}

impl ChordQuality {
    /// Frequency ratios of the chord tones relative to the root.
    pub fn ratios(self) -> [f64; 4] {
        match self {
            // Root, major 3rd, perfect 5th, octave
            ChordQuality::Major => [1.0, 1.25, 1.5, 2.0],
            // Root, minor 3rd, perfect 5th, octave
            ChordQuality::Minor => [1.0, 1.2, 1.5, 2.0],
            // Root, major 2nd, perfect 5th, octave
            ChordQuality::Sus2 => [1.0, 1.125, 1.5, 2.0],
            // Root, major 3rd, perfect 5th, sharp 4th
            ChordQuality::Lydian => [1.0, 1.25, 1.5, 1.375],
        }
    }

    /// Parse a quality name. Unknown names fall back to major.
    pub fn from_name(name: &str) -> Self {
        match name {
            "minor" => ChordQuality::Minor,
            "sus2" => ChordQuality::Sus2,
            "lydian" => ChordQuality::Lydian,
            _ => ChordQuality::Major,
        }
    }
}

/// A single chord to synthesize.
#[derive(Debug, Clone, Copy)]
pub struct ChordSpec {
    pub root_freq: f64,
    pub quality: ChordQuality,
    /// Duration in seconds.
    pub duration: f64,
}

/// Render an ambient pad for one chord.
///
/// The detuned voices draw their phases from `rng`; the center voice is
/// phase-locked at zero.
pub fn render_pad<R: Rng>(spec: &ChordSpec, sample_rate: u32, rng: &mut R) -> Vec<f32> {
    let len = (spec.duration * sample_rate as f64) as usize;
    let mut mixed = vec![0.0f32; len];

    for ratio in spec.quality.ratios() {
        let freq = spec.root_freq * ratio;

        let center = sine_wave(freq, spec.duration, 0.0, sample_rate);
        let low = sine_wave(
            freq * (1.0 - DETUNE),
            spec.duration,
            rng.gen_range(0.0..TAU),
            sample_rate,
        );
        let high = sine_wave(
            freq * (1.0 + DETUNE),
            spec.duration,
            rng.gen_range(0.0..TAU),
            sample_rate,
        );

        // Detuned voices at half amplitude, triple averaged.
        for i in 0..len {
            mixed[i] += (center[i] + 0.5 * low[i] + 0.5 * high[i]) / 2.0;
        }
    }

    normalize_peak(&mut mixed);
    apply_pad_envelope(&mut mixed, sample_rate);
    mixed
}

/// Trapezoid envelope: linear fade-in and fade-out, each capped at half
/// the buffer length so short pads keep valid, non-overlapping fades.
fn apply_pad_envelope(samples: &mut [f32], sample_rate: u32) {
    let len = samples.len();
    let half = len / 2;
    let attack = ((ATTACK_SECS * sample_rate as f64) as usize).min(half);
    let release = ((RELEASE_SECS * sample_rate as f64) as usize).min(half);

    // Ramps hit exactly 0.0 on the outermost sample of each fade.
    if attack > 0 {
        let denom = (attack - 1).max(1) as f32;
        for i in 0..attack {
            samples[i] *= i as f32 / denom;
        }
    }
    if release > 0 {
        let denom = (release - 1).max(1) as f32;
        for i in 0..release {
            samples[len - release + i] *= 1.0 - i as f32 / denom;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn pad_has_exact_length() {
        let spec = ChordSpec {
            root_freq: 220.0,
            quality: ChordQuality::Minor,
            duration: 10.0,
        };
        let pad = render_pad(&spec, 44100, &mut test_rng());
        assert_eq!(pad.len(), 441000);
    }

    #[test]
    fn pad_is_normalized_and_edge_silent() {
        let spec = ChordSpec {
            root_freq: 174.6,
            quality: ChordQuality::Lydian,
            duration: 6.0,
        };
        let pad = render_pad(&spec, 44100, &mut test_rng());

        let peak = pad.iter().map(|s| s.abs()).fold(0.0f32, f32::max);
        assert!(peak <= 1.0, "pad peak {peak} above full scale");
        assert!(peak > 0.3, "pad suspiciously quiet, peak {peak}");

        assert_eq!(pad[0], 0.0, "pad should fade in from silence");
        assert_eq!(*pad.last().unwrap(), 0.0, "pad should fade out to silence");
    }

    #[test]
    fn short_pad_clamps_fades_to_half_length() {
        // 3 s is under the 2+2 s fade pair; fades must not overlap.
        let spec = ChordSpec {
            root_freq: 130.8,
            quality: ChordQuality::Sus2,
            duration: 3.0,
        };
        let pad = render_pad(&spec, 44100, &mut test_rng());
        assert_eq!(pad.len(), 132300);
        assert_eq!(pad[0], 0.0);
        assert_eq!(*pad.last().unwrap(), 0.0);

        // The midpoint sits right where the clamped fades meet; the
        // quarter second around it still carries most of the envelope.
        let mid = pad.len() / 2;
        let near_mid_peak = pad[mid - 11025..mid + 11025]
            .iter()
            .map(|s| s.abs())
            .fold(0.0f32, f32::max);
        assert!(near_mid_peak > 0.2, "midpoint too quiet: {near_mid_peak}");
    }

    #[test]
    fn zero_duration_pad_is_empty_and_does_not_panic() {
        let spec = ChordSpec {
            root_freq: 220.0,
            quality: ChordQuality::Major,
            duration: 0.0,
        };
        let pad = render_pad(&spec, 44100, &mut test_rng());
        assert!(pad.is_empty());
    }

    #[test]
    fn unknown_quality_name_falls_back_to_major() {
        assert_eq!(ChordQuality::from_name("major"), ChordQuality::Major);
        assert_eq!(ChordQuality::from_name("minor"), ChordQuality::Minor);
        assert_eq!(ChordQuality::from_name("dorian"), ChordQuality::Major);
        assert_eq!(ChordQuality::from_name(""), ChordQuality::Major);
    }

    #[test]
    fn detuned_voices_differ_between_renders() {
        let spec = ChordSpec {
            root_freq: 220.0,
            quality: ChordQuality::Major,
            duration: 1.0,
        };
        let a = render_pad(&spec, 44100, &mut StdRng::seed_from_u64(1));
        let b = render_pad(&spec, 44100, &mut StdRng::seed_from_u64(2));
        assert!(
            a.iter().zip(&b).any(|(x, y)| x != y),
            "different seeds should detune differently"
        );
    }
}
