//! Linear-interpolation sample rate conversion
//!
//! This is deliberately the simple algorithm: two evenly spaced index grids
//! over `[0, len-1]` and linear interpolation between neighbouring samples.
//! No anti-aliasing filter is applied. Downstream golden files depend on this
//! exact behaviour, so it must not be swapped for a band-limited resampler.
//!
//! ```rust
//! use vqa_audio::resampling::resample_linear;
//!
//! let input = vec![0.0, 1.0, 0.0, -1.0];
//! let output = resample_linear(&input, 8_000, 16_000).unwrap();
//! assert_eq!(output.len(), 8);
//! ```

use crate::error::{AudioError, Result};

/// Length produced by `resample_linear`: `floor(len * target / source)`
pub fn resampled_len(len: usize, source_rate: u32, target_rate: u32) -> usize {
    let ratio = f64::from(target_rate) / f64::from(source_rate);
    (len as f64 * ratio).floor() as usize
}

/// Resample a mono signal from `source_rate` to `target_rate`
///
/// Returns a copy of the input when the rates already match.
///
/// # Errors
/// `InvalidBuffer` when either rate is zero.
pub fn resample_linear(samples: &[f32], source_rate: u32, target_rate: u32) -> Result<Vec<f32>> {
    if source_rate == 0 || target_rate == 0 {
        return Err(AudioError::InvalidBuffer(format!(
            "cannot resample {} Hz -> {} Hz",
            source_rate, target_rate
        )));
    }
    if source_rate == target_rate {
        return Ok(samples.to_vec());
    }

    let old_len = samples.len();
    let new_len = resampled_len(old_len, source_rate, target_rate);
    if old_len == 0 || new_len == 0 {
        return Ok(Vec::new());
    }

    let last = (old_len - 1) as f64;
    // linspace(0, last, new_len); a single point sits at the start
    let step = if new_len > 1 {
        last / (new_len - 1) as f64
    } else {
        0.0
    };

    let output = (0..new_len)
        .map(|j| {
            let x = if j == new_len - 1 && new_len > 1 {
                last
            } else {
                j as f64 * step
            };
            interpolate(samples, x) as f32
        })
        .collect();

    Ok(output)
}

/// Piecewise-linear value of `samples` at fractional index `x` in `[0, len-1]`
fn interpolate(samples: &[f32], x: f64) -> f64 {
    let last = samples.len() - 1;
    let i = (x.floor() as usize).min(last);
    if i == last {
        return f64::from(samples[last]);
    }
    let frac = x - i as f64;
    let a = f64::from(samples[i]);
    let b = f64::from(samples[i + 1]);
    a + (b - a) * frac
}
