//! Chord progression sequencing and session compositing.

use rand::Rng;
use tracing::debug;

use crate::buffer::normalize_peak;
use crate::chord::{render_pad, ChordSpec};
use crate::profile::ModeProfile;
use crate::texture::render_texture;

/// Fraction of each chord's rendered length shared with its successor.
const CHORD_OVERLAP: f64 = 0.2;

/// Mix weights for the chord bed and the noise texture.
const CHORD_GAIN: f32 = 0.8;
const TEXTURE_GAIN: f32 = 0.2;

/// Compose the mono session: drive the pad synthesizer across the
/// profile's progression with overlapping chunks, then lay the ambience
/// bed underneath.
///
/// Output is exactly `duration * sample_rate` samples.
pub fn compose_session<R: Rng>(
    profile: &ModeProfile,
    duration: f64,
    sample_rate: u32,
    rng: &mut R,
) -> Vec<f32> {
    let total = (duration * sample_rate as f64) as usize;
    let mut audio = vec![0.0f32; total];

    let mut cursor = 0usize;
    let mut chord_idx = 0usize;

    while cursor < total {
        let quality = profile.progression[chord_idx % profile.progression.len()];
        // Every fourth chord rises a perfect fifth before returning home.
        let root = if chord_idx % 4 == 2 {
            profile.root_freq * 1.5
        } else {
            profile.root_freq
        };

        let chord = render_pad(
            &ChordSpec {
                root_freq: root,
                quality,
                duration: profile.chord_duration,
            },
            sample_rate,
            rng,
        );

        // Overlapping regions sum rather than crossfade; the pad
        // envelopes are zero at both edges, so the seams stay
        // click-free. Deliberate simplification, kept as-is.
        let chunk = chord.len().min(total - cursor);
        for (dst, src) in audio[cursor..cursor + chunk].iter_mut().zip(&chord[..chunk]) {
            *dst += *src;
        }

        debug!(
            "chord {} ({:?}, root {:.1} Hz): {} samples at offset {}",
            chord_idx, quality, root, chunk, cursor
        );

        // Advance 80% of what was written, at least one sample so
        // degenerate tail chunks cannot stall the loop.
        cursor += ((chunk as f64 * (1.0 - CHORD_OVERLAP)) as usize).max(1);
        chord_idx += 1;
    }

    normalize_peak(&mut audio);

    let texture = render_texture(duration, sample_rate, rng);
    for (a, t) in audio.iter_mut().zip(texture.iter()) {
        *a = *a * CHORD_GAIN + *t * TEXTURE_GAIN;
    }

    audio
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::profile_for;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn session_has_exact_length() {
        let mut rng = StdRng::seed_from_u64(9);
        let audio = compose_session(profile_for("focus"), 12.0, 44100, &mut rng);
        assert_eq!(audio.len(), 12 * 44100);
    }

    #[test]
    fn session_stays_within_unit_range() {
        let mut rng = StdRng::seed_from_u64(9);
        let audio = compose_session(profile_for("relax"), 20.0, 44100, &mut rng);
        let peak = audio.iter().map(|s| s.abs()).fold(0.0f32, f32::max);
        assert!(peak <= 1.0, "composited peak {peak} above unit range");
        assert!(peak > 0.2, "composited session suspiciously quiet");
    }

    #[test]
    fn one_chord_duration_does_not_stall() {
        // Exactly one focus chord long: the overlap-add tail shrinks
        // geometrically and must still terminate.
        let mut rng = StdRng::seed_from_u64(9);
        let audio = compose_session(profile_for("focus"), 10.0, 44100, &mut rng);
        assert_eq!(audio.len(), 10 * 44100);
    }

    #[test]
    fn tiny_session_renders_without_panicking() {
        let mut rng = StdRng::seed_from_u64(9);
        let audio = compose_session(profile_for("sleep"), 1.0, 44100, &mut rng);
        assert_eq!(audio.len(), 44100);
    }
}
