//! Measurements on clean/degraded signal pairs

use crate::mixer::signal_power;
use crate::profile::FrequencyRange;
use crate::spectrum;

/// SNR of `degraded` against `clean`, treating the difference as noise
///
/// Compares up to the shorter length. Returns `f64::INFINITY` when the
/// residual is exactly zero and `f64::NEG_INFINITY` for a silent reference.
pub fn measure_snr_db(clean: &[f32], degraded: &[f32]) -> f64 {
    let len = clean.len().min(degraded.len());
    let clean = &clean[..len];
    let residual: Vec<f32> = clean
        .iter()
        .zip(&degraded[..len])
        .map(|(&c, &d)| d - c)
        .collect();

    let ps = signal_power(clean);
    let pn = signal_power(&residual);
    if pn == 0.0 {
        return f64::INFINITY;
    }
    if ps == 0.0 {
        return f64::NEG_INFINITY;
    }
    10.0 * (ps / pn).log10()
}

/// Root mean square level
pub fn rms(signal: &[f32]) -> f64 {
    signal_power(signal).sqrt()
}

/// Mean spectral power per bin in four equal slices of `range`, low to high
///
/// Slices with no bins report 0.
pub fn quartile_band_powers(signal: &[f32], sample_rate: u32, range: FrequencyRange) -> [f64; 4] {
    let input: Vec<f64> = signal.iter().map(|&x| f64::from(x)).collect();
    spectrum::quartile_band_powers(&input, sample_rate, range.low_hz, range.high_hz)
}
