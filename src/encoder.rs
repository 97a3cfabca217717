//! 16-bit PCM WAV encoding.
//!
//! Boundary-level packaging, not DSP: the stereo float buffer is
//! quantized and wrapped in a standard RIFF/WAVE container, entirely in
//! memory.

use std::io::Cursor;

use crate::buffer::StereoBuffer;
use crate::error::SynthesisError;

/// Encode a stereo buffer as an in-memory PCM WAV file.
///
/// Samples are clamped to [-1, 1] and quantized as `round(s * 32767)`;
/// the renderer normalizes before calling, so the clamp only guards
/// against stray rounding overshoot.
pub fn encode_wav(stereo: &StereoBuffer, sample_rate: u32) -> Result<Vec<u8>, SynthesisError> {
    let spec = hound::WavSpec {
        channels: 2,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    let mut writer = hound::WavWriter::new(&mut cursor, spec)
        .map_err(|e| SynthesisError::SynthesisFailure(format!("failed to create WAV writer: {e}")))?;

    for (&l, &r) in stereo.left.iter().zip(stereo.right.iter()) {
        writer
            .write_sample(quantize(l))
            .map_err(|e| SynthesisError::SynthesisFailure(format!("failed to write sample: {e}")))?;
        writer
            .write_sample(quantize(r))
            .map_err(|e| SynthesisError::SynthesisFailure(format!("failed to write sample: {e}")))?;
    }

    writer
        .finalize()
        .map_err(|e| SynthesisError::SynthesisFailure(format!("failed to finalize WAV: {e}")))?;

    Ok(cursor.into_inner())
}

fn quantize(sample: f32) -> i16 {
    (sample.clamp(-1.0, 1.0) * 32767.0).round() as i16
}
