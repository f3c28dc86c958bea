//! Frequency-domain shaping of real signals
//!
//! A full complex FFT is used for real input. Bin `k` and its mirror `n - k`
//! share a frequency and receive the same real gain, so the inverse stays
//! real up to rounding and only the real part is kept.

use rustfft::{num_complex::Complex, FftPlanner};

/// Frequency in Hz of bin `k` of an `n`-point transform
#[inline]
pub fn bin_frequency(k: usize, n: usize, sample_rate: u32) -> f64 {
    let folded = k.min(n - k);
    folded as f64 * f64::from(sample_rate) / n as f64
}

/// Multiply each bin by `gain(frequency_hz)` and transform back
pub fn shape_spectrum<F>(signal: &[f64], sample_rate: u32, gain: F) -> Vec<f64>
where
    F: Fn(f64) -> f64,
{
    let n = signal.len();
    if n == 0 {
        return Vec::new();
    }

    let mut planner = FftPlanner::<f64>::new();
    let forward = planner.plan_fft_forward(n);
    let inverse = planner.plan_fft_inverse(n);

    let mut spectrum: Vec<Complex<f64>> = signal.iter().map(|&x| Complex::new(x, 0.0)).collect();
    forward.process(&mut spectrum);

    for (k, bin) in spectrum.iter_mut().enumerate() {
        *bin *= gain(bin_frequency(k, n, sample_rate));
    }

    inverse.process(&mut spectrum);
    let scale = 1.0 / n as f64;
    spectrum.iter().map(|c| c.re * scale).collect()
}

/// Mean power per bin within each of four equal slices of `[low, high]`
///
/// Used to check spectral tilt of generated noise.
pub fn quartile_band_powers(signal: &[f64], sample_rate: u32, low_hz: f64, high_hz: f64) -> [f64; 4] {
    let n = signal.len();
    let mut sums = [0.0f64; 4];
    let mut counts = [0usize; 4];
    if n == 0 || high_hz <= low_hz {
        return sums;
    }

    let mut planner = FftPlanner::<f64>::new();
    let forward = planner.plan_fft_forward(n);
    let mut spectrum: Vec<Complex<f64>> = signal.iter().map(|&x| Complex::new(x, 0.0)).collect();
    forward.process(&mut spectrum);

    let width = (high_hz - low_hz) / 4.0;
    for (k, bin) in spectrum.iter().enumerate().take(n / 2 + 1) {
        let f = bin_frequency(k, n, sample_rate);
        if f < low_hz || f > high_hz {
            continue;
        }
        let q = (((f - low_hz) / width) as usize).min(3);
        sums[q] += bin.norm_sqr();
        counts[q] += 1;
    }

    let mut means = [0.0f64; 4];
    for q in 0..4 {
        if counts[q] > 0 {
            means[q] = sums[q] / counts[q] as f64;
        }
    }
    means
}
