//! Colored noise synthesis
//!
//! White Gaussian noise is shaped in the frequency domain, band-limited to
//! the profile's range and peak-normalized.

use crate::error::{NoiseError, Result};
use crate::filter::bandpass_f64;
use crate::profile::{NoiseProfile, SpectralShape};
use crate::spectrum::shape_spectrum;
use rand::Rng;
use tracing::debug;
use vqa_core::{AudioBuffer, SampleRate};

/// Added to the peak before normalizing so silence does not divide by zero
pub const NORMALIZATION_EPSILON: f64 = 1e-10;

/// Longest output accepted by [`generate`], in samples
///
/// About 18.6 hours at 16 kHz.
pub const MAX_OUTPUT_SAMPLES: u64 = 1 << 30;

/// Speech envelope formants as (center Hz, width Hz, weight)
const SPEECH_FORMANTS: [(f64, f64, f64); 3] =
    [(500.0, 200.0, 1.0), (1500.0, 300.0, 0.5), (2500.0, 400.0, 0.3)];

/// One standard normal sample (Box-Muller)
pub fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    // gen() is in [0, 1); flip it so ln never sees zero
    let u1 = 1.0 - rng.gen::<f64>();
    let u2 = rng.gen::<f64>();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

/// `len` i.i.d. N(0, 1) samples
pub fn white_noise<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<f64> {
    (0..len).map(|_| standard_normal(rng)).collect()
}

/// Spectral gain applied to white noise for `shape` at frequency `f`
pub fn shape_gain(shape: SpectralShape, f: f64) -> f64 {
    match shape {
        SpectralShape::White => 1.0,
        SpectralShape::Pink => {
            let divisor = if f == 0.0 { 1.0 } else { f.sqrt() };
            1.0 / divisor
        }
        SpectralShape::Brown => {
            let divisor = if f == 0.0 { 1.0 } else { f };
            1.0 / divisor
        }
        SpectralShape::SpeechShaped => speech_envelope(f),
    }
}

/// Three-formant approximation of the long-term speech spectrum
pub fn speech_envelope(f: f64) -> f64 {
    SPEECH_FORMANTS
        .iter()
        .map(|&(center, width, weight)| {
            weight * (-(f - center).powi(2) / (2.0 * width * width)).exp()
        })
        .sum()
}

/// Number of samples produced for `duration_secs` at `sample_rate`
///
/// Saturates for out-of-range durations; [`generate`] rejects those first.
pub fn output_len(duration_secs: f64, sample_rate: u32) -> usize {
    (duration_secs * f64::from(sample_rate)).round() as usize
}

pub(crate) fn validate(duration_secs: f64, sample_rate: u32) -> Result<()> {
    if !duration_secs.is_finite() || duration_secs < 0.0 {
        return Err(NoiseError::InvalidDuration(duration_secs));
    }
    if sample_rate == 0 {
        return Err(NoiseError::InvalidSampleRate(sample_rate));
    }
    if (duration_secs * f64::from(sample_rate)).round() > MAX_OUTPUT_SAMPLES as f64 {
        return Err(NoiseError::InvalidDuration(duration_secs));
    }
    Ok(())
}

/// Generate `duration_secs` of noise matching `profile`
///
/// Output has `round(duration * rate)` samples with peak just under 1.0.
///
/// # Errors
/// Negative or non-finite durations, durations longer than
/// [`MAX_OUTPUT_SAMPLES`] allows, and a zero sample rate.
pub fn generate<R: Rng + ?Sized>(
    profile: &NoiseProfile,
    duration_secs: f64,
    sample_rate: u32,
    rng: &mut R,
) -> Result<AudioBuffer> {
    validate(duration_secs, sample_rate)?;
    let len = output_len(duration_secs, sample_rate);
    let rate = SampleRate::new(sample_rate);
    if len == 0 {
        return Ok(AudioBuffer::new(Vec::new(), rate));
    }

    let white = white_noise(len, rng);
    let shape = profile.spectral_shape;
    let colored = match shape {
        SpectralShape::White => white,
        _ => shape_spectrum(&white, sample_rate, |f| shape_gain(shape, f)),
    };
    let banded = bandpass_f64(&colored, profile.frequency_range, sample_rate);

    let peak = banded.iter().fold(0.0f64, |m, x| m.max(x.abs()));
    let norm = peak + NORMALIZATION_EPSILON;
    let samples: Vec<f32> = banded.iter().map(|&x| (x / norm) as f32).collect();

    debug!(
        profile = profile.key,
        shape = %shape,
        samples = samples.len(),
        "generated noise"
    );
    Ok(AudioBuffer::new(samples, rate))
}
