//! SNR-controlled noise mixing
//!
//! Two paths exist on purpose. [`apply_noise`] models an acoustic
//! environment from the catalog; [`add_gaussian_noise`] models generic
//! channel noise with no spectral shaping.

use crate::error::{NoiseError, Result};
use crate::profile::NoiseProfile;
use crate::synth::{self, standard_normal};
use rand::Rng;
use tracing::debug;

/// Mean of squared samples
pub fn signal_power(signal: &[f32]) -> f64 {
    if signal.is_empty() {
        return 0.0;
    }
    signal.iter().map(|&x| f64::from(x) * f64::from(x)).sum::<f64>() / signal.len() as f64
}

/// Noise power that yields `snr_db` against a signal of `signal_power`
#[inline]
pub fn target_noise_power(signal_power: f64, snr_db: f64) -> f64 {
    signal_power / 10f64.powf(snr_db / 10.0)
}

fn check(signal: &[f32], snr_db: f64) -> Result<()> {
    if signal.is_empty() {
        return Err(NoiseError::EmptySignal);
    }
    if !snr_db.is_finite() {
        return Err(NoiseError::InvalidSnr(snr_db));
    }
    Ok(())
}

/// Add profile noise to `clean` at `target_snr_db`
///
/// The result is not clipped; samples may exceed [-1, 1] until the encode
/// step clamps them.
///
/// # Errors
/// Empty `clean`, a non-finite SNR or a zero sample rate.
pub fn apply_noise<R: Rng + ?Sized>(
    clean: &[f32],
    profile: &NoiseProfile,
    target_snr_db: f64,
    sample_rate: u32,
    rng: &mut R,
) -> Result<Vec<f32>> {
    check(clean, target_snr_db)?;
    if sample_rate == 0 {
        return Err(NoiseError::InvalidSampleRate(sample_rate));
    }

    let duration = clean.len() as f64 / f64::from(sample_rate);
    let mut noise = synth::generate(profile, duration, sample_rate, rng)?.into_samples();
    noise.resize(clean.len(), 0.0);

    let ps = signal_power(clean);
    let pn = signal_power(&noise);
    let target = target_noise_power(ps, target_snr_db);
    let scale = if pn > 0.0 { (target / pn).sqrt() } else { 1.0 };

    debug!(
        profile = profile.key,
        snr_db = target_snr_db,
        signal_power = ps,
        scale,
        "mixing profile noise"
    );

    Ok(clean
        .iter()
        .zip(&noise)
        .map(|(&s, &n)| (f64::from(s) + f64::from(n) * scale) as f32)
        .collect())
}

/// Add zero-mean white Gaussian noise at `target_snr_db`
///
/// # Errors
/// Empty `signal` or a non-finite SNR.
pub fn add_gaussian_noise<R: Rng + ?Sized>(
    signal: &[f32],
    target_snr_db: f64,
    rng: &mut R,
) -> Result<Vec<f32>> {
    check(signal, target_snr_db)?;

    let std_dev = target_noise_power(signal_power(signal), target_snr_db).sqrt();
    Ok(signal
        .iter()
        .map(|&s| (f64::from(s) + standard_normal(rng) * std_dev) as f32)
        .collect())
}
