//! Session rendering pipeline.
//!
//! Drives the full chain for one request: sequencer → texture mix →
//! entrainment modulation → spatialization → full-scale limit → PCM
//! encoding. Each invocation owns its buffers outright; the only shared
//! state is the read-only profile table.

use rand::Rng;
use tracing::{debug, info};

use crate::buffer::{rms, StereoBuffer};
use crate::encoder::encode_wav;
use crate::error::SynthesisError;
use crate::modulation::apply_entrainment;
use crate::profile::profile_for;
use crate::sequencer::compose_session;
use crate::spatial::{rotate_pan, widen, ROTATION_RATE_HZ};
use crate::SAMPLE_RATE;

/// Statistics about a rendered session.
#[derive(Debug, Clone)]
pub struct SessionStats {
    pub frames: usize,
    pub duration_secs: f32,
    pub peak: f32,
    pub rms: f32,
}

impl SessionStats {
    pub fn from_stereo(stereo: &StereoBuffer, sample_rate: u32) -> Self {
        let frames = stereo.frames();
        Self {
            frames,
            duration_secs: frames as f32 / sample_rate as f32,
            peak: stereo.peak(),
            rms: rms(&stereo.left).max(rms(&stereo.right)),
        }
    }
}

/// Offline renderer for entrainment sessions.
///
/// Stateless apart from the fixed sample rate; safe to share across
/// threads, with each render owning its own buffers.
pub struct SessionRenderer {
    sample_rate: u32,
}

impl Default for SessionRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionRenderer {
    pub fn new() -> Self {
        Self {
            sample_rate: SAMPLE_RATE,
        }
    }

    /// Render a session to an in-memory WAV byte stream.
    ///
    /// Unknown modes fall back to the default profile rather than
    /// failing; a zero duration is rejected with `InvalidArgument`.
    pub fn render(&self, mode: &str, duration_secs: u32) -> Result<Vec<u8>, SynthesisError> {
        self.render_with_rng(mode, duration_secs, &mut rand::thread_rng())
    }

    /// Render with an explicit random source. A seeded RNG makes the
    /// output fully reproducible.
    pub fn render_with_rng<R: Rng>(
        &self,
        mode: &str,
        duration_secs: u32,
        rng: &mut R,
    ) -> Result<Vec<u8>, SynthesisError> {
        let stereo = self.render_stereo_with_rng(mode, duration_secs, rng)?;
        encode_wav(&stereo, self.sample_rate)
    }

    /// Render the pre-quantization stereo buffer.
    pub fn render_stereo(
        &self,
        mode: &str,
        duration_secs: u32,
    ) -> Result<StereoBuffer, SynthesisError> {
        self.render_stereo_with_rng(mode, duration_secs, &mut rand::thread_rng())
    }

    /// Render the pre-quantization stereo buffer with an explicit
    /// random source.
    pub fn render_stereo_with_rng<R: Rng>(
        &self,
        mode: &str,
        duration_secs: u32,
        rng: &mut R,
    ) -> Result<StereoBuffer, SynthesisError> {
        if duration_secs == 0 {
            return Err(SynthesisError::InvalidArgument(
                "session duration must be at least one second".to_string(),
            ));
        }

        let profile = profile_for(mode);
        info!(
            "rendering {} s \"{}\" session with the {} profile",
            duration_secs, mode, profile.name
        );

        let duration = f64::from(duration_secs);
        let mut audio = compose_session(profile, duration, self.sample_rate, rng);
        apply_entrainment(
            &mut audio,
            profile.modulation_freq,
            profile.modulation_depth,
            self.sample_rate,
        );

        // Only the literal "sleep" mode gets the rotating field;
        // everything else, the fallback included, is dual-mono widening.
        let mut stereo = if mode == "sleep" {
            rotate_pan(&audio, ROTATION_RATE_HZ, self.sample_rate)
        } else {
            widen(&audio)
        };

        // Modulation can push the mix past full scale; pull both
        // channels down uniformly so quantization never clips.
        let peak = stereo.peak();
        if peak > 1.0 {
            stereo.scale(1.0 / peak);
        }

        let stats = SessionStats::from_stereo(&stereo, self.sample_rate);
        debug!("render complete: {:?}", stats);

        Ok(stereo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_duration_is_an_invalid_argument() {
        let err = SessionRenderer::new().render("focus", 0).unwrap_err();
        assert!(matches!(err, SynthesisError::InvalidArgument(_)));
    }

    #[test]
    fn stats_reflect_the_buffer() {
        let stereo = StereoBuffer {
            left: vec![0.5; 44100],
            right: vec![-0.5; 44100],
        };
        let stats = SessionStats::from_stereo(&stereo, SAMPLE_RATE);
        assert_eq!(stats.frames, 44100);
        assert!((stats.duration_secs - 1.0).abs() < 1e-6);
        assert!((stats.peak - 0.5).abs() < 1e-6);
        assert!((stats.rms - 0.5).abs() < 1e-6);
    }
}
