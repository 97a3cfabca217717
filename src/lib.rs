//! # Entrain - procedural brainwave entrainment session synthesis
//!
//! Renders multi-minute entrainment sessions (focus, relax, sleep,
//! meditate) as stereo 16-bit PCM WAV, fully in memory. The pipeline is
//! single-pass and purely computational: an additive pad synthesizer is
//! driven across a per-mode chord progression with overlapping chunks, a
//! filtered-noise ambience bed is mixed underneath, a slow amplitude
//! modulation imprints the mode's entrainment frequency, and the result
//! is spatialized to stereo and quantized.
//!
//! ## Quick start
//!
//! ```rust
//! use entrain::SessionRenderer;
//!
//! let renderer = SessionRenderer::new();
//! let wav = renderer.render("focus", 10)?;
//! assert!(wav.starts_with(b"RIFF"));
//! # Ok::<(), entrain::SynthesisError>(())
//! ```
//!
//! ## Modes
//!
//! | mode     | band  | modulation | character                 |
//! |----------|-------|------------|---------------------------|
//! | focus    | beta  | 14 Hz      | minor colors, steady      |
//! | relax    | alpha | 10 Hz      | major/lydian, dreamy      |
//! | sleep    | delta | 2 Hz       | deep drones, rotating pan |
//! | meditate | theta | 6 Hz       | calm, slow changes        |
//!
//! Unknown mode names render with a generic default profile instead of
//! failing, so the surrounding service never has to special-case its
//! input.
//!
//! ## Determinism
//!
//! The chorus detuning and the noise bed draw from a caller-supplied
//! random source. [`SessionRenderer::render`] uses the thread RNG; pass
//! a seeded RNG to [`SessionRenderer::render_with_rng`] for
//! bit-reproducible output.
//!
//! ## Verification
//!
//! The [`analysis`] module recovers the amplitude envelope of a rendered
//! signal (analytic-signal magnitude) and locates its dominant spectral
//! peak; the integration tests hold every mode to within ±1 Hz of its
//! target band.

pub mod analysis;
pub mod buffer;
pub mod chord;
pub mod encoder;
pub mod error;
pub mod modulation;
pub mod oscillator;
pub mod profile;
pub mod render;
pub mod sequencer;
pub mod spatial;
pub mod texture;

/// Fixed output sample rate in Hz.
pub const SAMPLE_RATE: u32 = 44100;

pub use buffer::StereoBuffer;
pub use error::SynthesisError;
pub use render::{SessionRenderer, SessionStats};
