//! Rectangular FFT bandpass
//!
//! Bins outside the band are zeroed outright. This rings and leaks compared
//! to a designed filter; generated noise depends on it, so it stays.

use crate::profile::FrequencyRange;
use crate::spectrum::shape_spectrum;

/// Keep only bins whose frequency lies in `range` (bounds inclusive)
pub fn bandpass(signal: &[f32], range: FrequencyRange, sample_rate: u32) -> Vec<f32> {
    let input: Vec<f64> = signal.iter().map(|&x| f64::from(x)).collect();
    bandpass_f64(&input, range, sample_rate)
        .into_iter()
        .map(|x| x as f32)
        .collect()
}

pub(crate) fn bandpass_f64(signal: &[f64], range: FrequencyRange, sample_rate: u32) -> Vec<f64> {
    shape_spectrum(signal, sample_rate, |f| if range.contains(f) { 1.0 } else { 0.0 })
}
