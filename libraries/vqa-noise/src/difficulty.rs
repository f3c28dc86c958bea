//! ASR difficulty estimates per profile

use crate::catalog;
use crate::profile::{Difficulty, NoiseCategory};
use serde::Serialize;

/// Width of the recommended sweep on either side of the typical SNR
pub const SWEEP_HALF_WIDTH_DB: f64 = 10.0;

/// Finest sweep spacing; 2001 points across the recommended range
pub const MIN_SWEEP_STEP_DB: f64 = 0.01;

/// Whether `step_db` is a usable sweep spacing
pub fn is_valid_sweep_step(step_db: f64) -> bool {
    step_db.is_finite() && step_db >= MIN_SWEEP_STEP_DB
}

/// Expected word error rate increase, in percentage points
pub fn estimated_wer_increase(difficulty: Difficulty) -> f64 {
    match difficulty {
        Difficulty::Easy => 2.0,
        Difficulty::Medium => 5.0,
        Difficulty::Hard => 15.0,
        Difficulty::VeryHard => 30.0,
        Difficulty::Extreme => 50.0,
        Difficulty::Unknown => 10.0,
    }
}

/// Summary used by reporting layers to plan and read robustness runs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileMetrics {
    pub profile_key: String,
    pub category: NoiseCategory,
    pub difficulty: Difficulty,
    pub typical_snr_db: f64,
    pub estimated_wer_increase: f64,
    /// Inclusive `(low, high)` SNR range in dB
    pub recommended_snr_range: (f64, f64),
}

impl ProfileMetrics {
    /// Points from low to high in `step_db` increments, high always included
    ///
    /// A step that fails [`is_valid_sweep_step`] yields just the two
    /// endpoints.
    pub fn sweep_points(&self, step_db: f64) -> Vec<f64> {
        let (low, high) = self.recommended_snr_range;
        if !is_valid_sweep_step(step_db) {
            return vec![low, high];
        }

        let steps = ((high - low) / step_db).floor() as usize;
        let mut points: Vec<f64> = (0..=steps).map(|i| low + i as f64 * step_db).collect();
        match points.last_mut() {
            Some(last) if (high - *last).abs() <= 1e-9 => *last = high,
            _ => points.push(high),
        }
        points
    }
}

/// Metrics for `key`; unknown keys report the sentinel's tiers
pub fn metrics(key: &str) -> ProfileMetrics {
    let profile = catalog::get(key);
    let typical = profile.typical_snr_db;
    ProfileMetrics {
        profile_key: key.to_string(),
        category: profile.category,
        difficulty: profile.difficulty,
        typical_snr_db: typical,
        estimated_wer_increase: estimated_wer_increase(profile.difficulty),
        recommended_snr_range: (typical - SWEEP_HALF_WIDTH_DB, typical + SWEEP_HALF_WIDTH_DB),
    }
}
