//! Offline analysis of rendered sessions.
//!
//! The renderer is verified without ears: tests recover the amplitude
//! envelope of a rendered signal through the analytic-signal (Hilbert)
//! construction and locate the envelope's dominant spectral peak, which
//! must sit on the profile's entrainment frequency.

use num_complex::Complex;
use rustfft::FftPlanner;

/// Spatialization artifacts live below this frequency; the envelope
/// peak search ignores them.
pub const MIN_MODULATION_HZ: f64 = 0.5;

/// Amplitude envelope via the analytic signal.
///
/// Forward FFT, drop the negative-frequency half (doubling the positive
/// bins, leaving DC and Nyquist as-is), inverse FFT, per-sample
/// magnitude.
pub fn amplitude_envelope(samples: &[f32]) -> Vec<f64> {
    let n = samples.len();
    if n == 0 {
        return Vec::new();
    }

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(n);
    let ifft = planner.plan_fft_inverse(n);

    let mut buf: Vec<Complex<f64>> = samples
        .iter()
        .map(|&s| Complex::new(s as f64, 0.0))
        .collect();
    fft.process(&mut buf);

    for bin in buf.iter_mut().take((n + 1) / 2).skip(1) {
        *bin *= 2.0;
    }
    for bin in buf.iter_mut().skip(n / 2 + 1) {
        *bin = Complex::new(0.0, 0.0);
    }

    ifft.process(&mut buf);

    // rustfft leaves the inverse unscaled.
    let scale = 1.0 / n as f64;
    buf.iter().map(|c| c.norm() * scale).collect()
}

/// Locate the dominant frequency of a signal's amplitude envelope, in Hz.
///
/// The envelope's mean is removed before the spectral search so the DC
/// bulk does not mask the modulation peak, and bins below
/// [`MIN_MODULATION_HZ`] are excluded.
pub fn modulation_frequency(samples: &[f32], sample_rate: u32) -> f64 {
    let n = samples.len();
    if n == 0 {
        return 0.0;
    }

    let mut envelope = amplitude_envelope(samples);
    let mean = envelope.iter().sum::<f64>() / n as f64;
    for e in envelope.iter_mut() {
        *e -= mean;
    }

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(n);
    let mut buf: Vec<Complex<f64>> = envelope.iter().map(|&e| Complex::new(e, 0.0)).collect();
    fft.process(&mut buf);

    let bin_width = sample_rate as f64 / n as f64;
    let first_bin = (MIN_MODULATION_HZ / bin_width).ceil() as usize;

    let mut peak_bin = 0usize;
    let mut peak_mag = 0.0f64;
    for (i, bin) in buf.iter().enumerate().take(n / 2).skip(first_bin) {
        let mag = bin.norm();
        if mag > peak_mag {
            peak_mag = mag;
            peak_bin = i;
        }
    }

    peak_bin as f64 * bin_width
}
